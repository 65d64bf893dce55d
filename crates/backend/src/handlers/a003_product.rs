use axum::Json;

use crate::domain::a003_product;

/// GET /api/products
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a003_product::aggregate::Product>>,
    axum::http::StatusCode,
> {
    match a003_product::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list products: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/products/testdata
pub async fn insert_test_data() -> axum::http::StatusCode {
    match a003_product::service::insert_test_data().await {
        Ok(_) => axum::http::StatusCode::OK,
        Err(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
    }
}
