use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub collection_id: i32,
    pub price: f64,
    pub description: String,
    pub main_image_url: String,
    pub gallery_image_urls: Vec<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub collection_id: i32,
    pub price: f64,
    pub description: String,
    pub main_image_url: String,
    pub gallery_image_urls: Vec<String>,
}

/// Partial update: absent fields are left untouched in the store write.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItem {
    pub collection_id: Option<i32>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub main_image_url: Option<String>,
    pub gallery_image_urls: Option<Vec<String>>,
}

impl UpdateItem {
    /// True when no field beyond the id was supplied
    pub fn is_empty(&self) -> bool {
        self.collection_id.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.main_image_url.is_none()
            && self.gallery_image_urls.is_none()
    }
}

// ============ Store-boundary coercion ============
//
// Price is persisted as NUMERIC(10,2) so currency amounts never pick up
// binary floating-point rounding; the API always speaks f64. The gallery is
// persisted as a JSONB array of URL strings; the API always speaks Vec<String>.

/// Convert an API price to its stored decimal form, rounded to cents.
/// None when the float is NaN or infinite.
pub fn price_to_decimal(price: f64) -> Option<Decimal> {
    Decimal::from_f64(price).map(|d| d.round_dp(2))
}

/// Convert a stored NUMERIC(10,2) price back to the API float.
pub fn price_to_f64(price: Decimal) -> f64 {
    price.to_f64().unwrap_or_default()
}

/// Decode a stored gallery column. A missing or unrecognizable value
/// decodes to the empty list rather than an error.
pub fn decode_gallery(value: Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}
