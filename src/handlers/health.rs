use axum::Json;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthcheckResponse {
    pub status: String,
    pub timestamp: String,
}

/// Service liveness probe
#[utoipa::path(
    get,
    path = "/rpc/healthcheck",
    responses(
        (status = 200, description = "Service is up", body = HealthcheckResponse)
    ),
    tag = "Health"
)]
pub async fn healthcheck() -> AppResult<Json<HealthcheckResponse>> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(HealthcheckResponse {
        status: "ok".to_string(),
        timestamp,
    }))
}
