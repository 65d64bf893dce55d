use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a005_purchase_order;
use contracts::domain::a005_purchase_order::aggregate::{PurchaseOrder, PurchaseOrderDto};

/// GET /api/purchase-orders
pub async fn list_all() -> Result<Json<Vec<PurchaseOrder>>, axum::http::StatusCode> {
    match a005_purchase_order::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list purchase orders: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/purchase-orders/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<PurchaseOrder>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a005_purchase_order::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load purchase order {id}: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/purchase-orders
pub async fn create(
    Json(dto): Json<PurchaseOrderDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a005_purchase_order::service::create(dto).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(e) => {
            tracing::error!("Failed to create purchase order: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PUT /api/purchase-orders/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<PurchaseOrderDto>,
) -> Result<Json<PurchaseOrder>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a005_purchase_order::service::update(uuid, dto).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update purchase order {id}: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/purchase-orders/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a005_purchase_order::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete purchase order {id}: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
