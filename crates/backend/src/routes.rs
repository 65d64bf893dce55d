use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Справочник поставщиков
        .route("/api/suppliers", get(handlers::a001_supplier::list_all))
        .route(
            "/api/suppliers/testdata",
            post(handlers::a001_supplier::insert_test_data),
        )
        // A002 Справочник складов
        .route("/api/warehouses", get(handlers::a002_warehouse::list_all))
        .route(
            "/api/warehouses/testdata",
            post(handlers::a002_warehouse::insert_test_data),
        )
        // A003 Справочник товаров
        .route("/api/products", get(handlers::a003_product::list_all))
        .route(
            "/api/products/testdata",
            post(handlers::a003_product::insert_test_data),
        )
        // A004 Справочник ставок НДС
        .route("/api/vat-rates", get(handlers::a004_vat_rate::list_all))
        .route(
            "/api/vat-rates/testdata",
            post(handlers::a004_vat_rate::insert_test_data),
        )
        // A005 Заказы поставщикам: фильтрация/сортировка выполняются на клиенте,
        // список отдается целиком
        .route(
            "/api/purchase-orders",
            get(handlers::a005_purchase_order::list_all)
                .post(handlers::a005_purchase_order::create),
        )
        .route(
            "/api/purchase-orders/:id",
            get(handlers::a005_purchase_order::get_by_id)
                .put(handlers::a005_purchase_order::update)
                .delete(handlers::a005_purchase_order::delete),
        )
        .fallback_service(ServeDir::new("dist"))
}
