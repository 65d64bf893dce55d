//! REST-клиент заказов поставщикам и справочников.
//!
//! Движок фильтрации получает список целиком; после create/update/delete
//! вызывающая сторона перезагружает данные через `load_all`.

use crate::shared::api_utils::api_base;
use contracts::domain::a001_supplier::aggregate::Supplier;
use contracts::domain::a002_warehouse::aggregate::Warehouse;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_vat_rate::aggregate::VatRate;
use contracts::domain::a005_purchase_order::aggregate::{PurchaseOrder, PurchaseOrderDto};
use gloo_net::http::Request;

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;
    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Ошибка разбора ответа: {}", e))
}

/// Загрузить все заказы (фильтрация выполняется на клиенте)
pub async fn load_all() -> Result<Vec<PurchaseOrder>, String> {
    let cache_buster = js_sys::Date::now() as u64;
    let url = format!("{}/api/purchase-orders?_ts={}", api_base(), cache_buster);
    fetch_json(&url).await
}

pub async fn get_by_id(id: &str) -> Result<PurchaseOrder, String> {
    let url = format!("{}/api/purchase-orders/{}", api_base(), id);
    fetch_json(&url).await
}

pub async fn create(dto: &PurchaseOrderDto) -> Result<(), String> {
    let url = format!("{}/api/purchase-orders", api_base());
    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| format!("Ошибка сериализации: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;
    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }
    Ok(())
}

pub async fn update(id: &str, dto: &PurchaseOrderDto) -> Result<(), String> {
    let url = format!("{}/api/purchase-orders/{}", api_base(), id);
    let response = Request::put(&url)
        .json(dto)
        .map_err(|e| format!("Ошибка сериализации: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;
    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }
    Ok(())
}

pub async fn delete(id: &str) -> Result<(), String> {
    let url = format!("{}/api/purchase-orders/{}", api_base(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;
    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }
    Ok(())
}

pub async fn load_suppliers() -> Result<Vec<Supplier>, String> {
    fetch_json(&format!("{}/api/suppliers", api_base())).await
}

pub async fn load_warehouses() -> Result<Vec<Warehouse>, String> {
    fetch_json(&format!("{}/api/warehouses", api_base())).await
}

pub async fn load_products() -> Result<Vec<Product>, String> {
    fetch_json(&format!("{}/api/products", api_base())).await
}

pub async fn load_vat_rates() -> Result<Vec<VatRate>, String> {
    fetch_json(&format!("{}/api/vat-rates", api_base())).await
}
