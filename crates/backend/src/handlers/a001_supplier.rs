use axum::Json;

use crate::domain::a001_supplier;

/// GET /api/suppliers
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a001_supplier::aggregate::Supplier>>,
    axum::http::StatusCode,
> {
    match a001_supplier::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list suppliers: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/suppliers/testdata
pub async fn insert_test_data() -> axum::http::StatusCode {
    match a001_supplier::service::insert_test_data().await {
        Ok(_) => axum::http::StatusCode::OK,
        Err(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
    }
}
