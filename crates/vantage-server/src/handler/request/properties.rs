//! Request payloads for property listing operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use vantage_postgres::model::{NewProperty, UpdateProperty};
use vantage_postgres::types::{PropertyFilter, PropertyKind, PropertyStatus};

use super::PaginationParams;

/// Request payload for creating a listing.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    /// Listing headline.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Long-form listing description.
    #[serde(default)]
    pub description: String,
    /// Asking price in the listing currency.
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Street address.
    #[validate(length(min = 1))]
    pub street_address: String,
    /// City name.
    #[validate(length(min = 1))]
    pub city: String,
    /// State, province, or region.
    #[validate(length(min = 1))]
    pub state_region: String,
    /// Postal or ZIP code.
    #[validate(length(min = 1))]
    pub postal_code: String,
    /// ISO country code; defaults to "US".
    #[serde(default = "CreatePropertyRequest::default_country")]
    pub country: String,
    /// Physical category of the property.
    pub kind: PropertyKind,
    /// Number of bedrooms.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub bedrooms: i32,
    /// Number of bathrooms.
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub bathrooms: f64,
    /// Interior area in square feet.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub square_feet: i32,
    /// Year of construction.
    #[serde(default)]
    pub year_built: i32,
    /// Lot size in acres.
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub lot_size: f64,
    /// Free-form feature tags.
    #[serde(default)]
    pub features: Vec<String>,
    /// Gallery image URLs.
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl CreatePropertyRequest {
    fn default_country() -> String {
        "US".to_string()
    }

    /// Converts the payload into the insertable model, owned by `owner_id`.
    pub fn into_new_property(self, owner_id: Uuid) -> NewProperty {
        NewProperty {
            owner_id,
            title: self.title,
            description: self.description,
            price: self.price,
            street_address: self.street_address,
            city: self.city,
            state_region: self.state_region,
            postal_code: self.postal_code,
            country: self.country,
            kind: Some(self.kind),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            year_built: self.year_built,
            lot_size: self.lot_size,
            features: self.features,
            image_urls: self.image_urls,
        }
    }
}

/// Request payload for partially updating a listing.
///
/// Every field is optional; absent fields are left unchanged.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    /// Listing headline.
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    /// Long-form listing description.
    pub description: Option<String>,
    /// Asking price in the listing currency.
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    /// Street address.
    pub street_address: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// State, province, or region.
    pub state_region: Option<String>,
    /// Postal or ZIP code.
    pub postal_code: Option<String>,
    /// ISO country code.
    pub country: Option<String>,
    /// Physical category of the property.
    pub kind: Option<PropertyKind>,
    /// Sales lifecycle status.
    pub status: Option<PropertyStatus>,
    /// Number of bedrooms.
    #[validate(range(min = 0))]
    pub bedrooms: Option<i32>,
    /// Number of bathrooms.
    #[validate(range(min = 0.0))]
    pub bathrooms: Option<f64>,
    /// Interior area in square feet.
    #[validate(range(min = 0))]
    pub square_feet: Option<i32>,
    /// Year of construction.
    pub year_built: Option<i32>,
    /// Lot size in acres.
    #[validate(range(min = 0.0))]
    pub lot_size: Option<f64>,
    /// Free-form feature tags.
    pub features: Option<Vec<String>>,
    /// Gallery image URLs.
    pub image_urls: Option<Vec<String>>,
    /// Virtual tour URL.
    pub tour_url: Option<String>,
}

impl UpdatePropertyRequest {
    /// Converts the payload into the partial-update model.
    pub fn into_update_property(self) -> UpdateProperty {
        UpdateProperty {
            title: self.title,
            description: self.description,
            price: self.price,
            street_address: self.street_address,
            city: self.city,
            state_region: self.state_region,
            postal_code: self.postal_code,
            country: self.country,
            kind: self.kind,
            status: self.status,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            year_built: self.year_built,
            lot_size: self.lot_size,
            features: self.features,
            image_urls: self.image_urls,
            tour_url: self.tour_url,
        }
    }
}

/// Query parameters for the listing search endpoint.
///
/// Pagination fields are inlined rather than nested because query-string
/// deserialization does not support flattened typed fields.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchPropertiesParams {
    /// Free-text search over title, description, and street address.
    pub query: Option<String>,
    /// Lower bound on the asking price.
    #[validate(range(min = 0.0))]
    pub min_price: Option<f64>,
    /// Upper bound on the asking price.
    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
    /// Restrict to one property kind.
    pub kind: Option<PropertyKind>,
    /// Restrict to one listing status.
    pub status: Option<PropertyStatus>,
    /// Minimum number of bedrooms.
    #[validate(range(min = 0))]
    pub min_bedrooms: Option<i32>,
    /// Minimum number of bathrooms.
    #[validate(range(min = 0.0))]
    pub min_bathrooms: Option<f64>,
    /// Substring match on the city name.
    pub city: Option<String>,
    /// Substring match on the state or region name.
    pub state_region: Option<String>,

    /// Page number, starting at 1.
    #[validate(range(min = 1))]
    pub page: i64,
    /// Number of records per page (1 to 100).
    #[validate(range(min = 1, max = 100))]
    pub page_size: i64,
}

impl Default for SearchPropertiesParams {
    fn default() -> Self {
        let pagination = PaginationParams::default();
        Self {
            query: None,
            min_price: None,
            max_price: None,
            kind: None,
            status: None,
            min_bedrooms: None,
            min_bathrooms: None,
            city: None,
            state_region: None,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }
}

impl SearchPropertiesParams {
    /// Splits the parameters into the query filter and pagination.
    pub fn into_parts(self) -> (PropertyFilter, vantage_postgres::query::Pagination) {
        let filter = PropertyFilter {
            query: self.query,
            min_price: self.min_price,
            max_price: self.max_price,
            kind: self.kind,
            status: self.status,
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: self.min_bathrooms,
            city: self.city,
            state_region: self.state_region,
        };
        (
            filter,
            vantage_postgres::query::Pagination::from_page(self.page, self.page_size),
        )
    }
}
