//! Property response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vantage_postgres::model;
use vantage_postgres::types::{PropertyKind, PropertyStatus};

/// Public view of a property listing.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique identifier of the listing.
    pub property_id: Uuid,
    /// Account that owns this listing.
    pub owner_id: Uuid,
    /// Listing headline.
    pub title: String,
    /// Long-form listing description.
    pub description: String,
    /// Asking price in the listing currency.
    pub price: f64,
    /// Street address.
    pub street_address: String,
    /// City name.
    pub city: String,
    /// State, province, or region.
    pub state_region: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// ISO country code.
    pub country: String,
    /// Physical category of the property.
    pub kind: PropertyKind,
    /// Sales lifecycle status.
    pub status: PropertyStatus,
    /// Number of bedrooms.
    pub bedrooms: i32,
    /// Number of bathrooms.
    pub bathrooms: f64,
    /// Interior area in square feet.
    pub square_feet: i32,
    /// Year of construction.
    pub year_built: i32,
    /// Lot size in acres.
    pub lot_size: f64,
    /// Free-form feature tags.
    pub features: Vec<String>,
    /// Gallery image URLs.
    pub image_urls: Vec<String>,
    /// Virtual tour URL (optional).
    pub tour_url: Option<String>,

    /// Timestamp when the listing was created.
    pub created_at: Timestamp,
    /// Timestamp when the listing was last updated.
    pub updated_at: Timestamp,
}

impl Property {
    /// Creates the public view from the database model.
    pub fn from_model(property: model::Property) -> Self {
        Self {
            property_id: property.id,
            owner_id: property.owner_id,
            title: property.title,
            description: property.description,
            price: property.price,
            street_address: property.street_address,
            city: property.city,
            state_region: property.state_region,
            postal_code: property.postal_code,
            country: property.country,
            kind: property.kind,
            status: property.status,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            square_feet: property.square_feet,
            year_built: property.year_built,
            lot_size: property.lot_size,
            features: property.features,
            image_urls: property.image_urls,
            tour_url: property.tour_url,
            created_at: property.created_at.into(),
            updated_at: property.updated_at.into(),
        }
    }
}

impl From<model::Property> for Property {
    fn from(property: model::Property) -> Self {
        Self::from_model(property)
    }
}
