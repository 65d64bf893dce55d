use axum::Json;

use crate::domain::a002_warehouse;

/// GET /api/warehouses
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a002_warehouse::aggregate::Warehouse>>,
    axum::http::StatusCode,
> {
    match a002_warehouse::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list warehouses: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/warehouses/testdata
pub async fn insert_test_data() -> axum::http::StatusCode {
    match a002_warehouse::service::insert_test_data().await {
        Ok(_) => axum::http::StatusCode::OK,
        Err(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
    }
}
