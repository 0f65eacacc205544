use serde::Deserialize;
use url::Url;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

/// Query input for by-id lookups
#[derive(Debug, Deserialize, IntoParams)]
pub struct IdParams {
    pub id: i32,
}

/// Query input for by-collection lookups
#[derive(Debug, Deserialize, IntoParams)]
pub struct CollectionIdParams {
    pub collection_id: i32,
}

/// Body of the delete mutations
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteRequest {
    pub id: i32,
}

/// Reject a blank required text field
pub fn validate_required(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Apply the required-field rule only when the update supplied the field
pub fn validate_optional(value: &Option<String>, field: &str) -> AppResult<()> {
    match value {
        Some(v) => validate_required(v, field),
        None => Ok(()),
    }
}

/// Reject a string that does not parse as a URL
pub fn validate_url(value: &str, field: &str) -> AppResult<()> {
    Url::parse(value).map_err(|_| AppError::Validation(format!("{} must be a valid URL", field)))?;
    Ok(())
}

/// Apply the URL rule only when the update supplied the field
pub fn validate_optional_url(value: &Option<String>, field: &str) -> AppResult<()> {
    match value {
        Some(v) => validate_url(v, field),
        None => Ok(()),
    }
}

/// Reject any list entry that does not parse as a URL
pub fn validate_url_list(values: &[String], field: &str) -> AppResult<()> {
    for value in values {
        validate_url(value, field)?;
    }
    Ok(())
}

/// Reject a price that is not a finite, strictly positive number
pub fn validate_positive(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Validation(format!("{} must be positive", field)));
    }
    Ok(())
}
