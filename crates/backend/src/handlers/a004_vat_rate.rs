use axum::Json;

use crate::domain::a004_vat_rate;

/// GET /api/vat-rates
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a004_vat_rate::aggregate::VatRate>>,
    axum::http::StatusCode,
> {
    match a004_vat_rate::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list vat rates: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/vat-rates/testdata
pub async fn insert_test_data() -> axum::http::StatusCode {
    match a004_vat_rate::service::insert_test_data().await {
        Ok(_) => axum::http::StatusCode::OK,
        Err(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
    }
}
