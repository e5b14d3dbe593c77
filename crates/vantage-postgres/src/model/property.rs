//! Property listing model for PostgreSQL database operations.
//!
//! ## Models
//!
//! - [`Property`] - Main listing model with location, pricing, and attributes
//! - [`NewProperty`] - Data structure for creating new listings
//! - [`UpdateProperty`] - Data structure for partial listing updates

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::properties;
use crate::types::{PropertyKind, PropertyStatus};

/// Main property model representing a real-estate listing.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Property {
    /// Unique listing identifier.
    pub id: Uuid,
    /// Account that owns this listing; the only identity allowed to mutate it.
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
    /// Number of bathrooms (half baths count as 0.5).
    pub bathrooms: f64,
    /// Interior area in square feet.
    pub square_feet: i32,
    /// Year of construction.
    pub year_built: i32,
    /// Lot size in acres.
    pub lot_size: f64,
    /// Free-form feature tags (e.g. "pool", "garage").
    pub features: Vec<String>,
    /// Gallery image URLs.
    pub image_urls: Vec<String>,
    /// Optional virtual tour URL.
    pub tour_url: Option<String>,
    /// Timestamp when the listing was created.
    pub created_at: Timestamp,
    /// Timestamp when the listing was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the listing was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// Data for creating a new listing.
///
/// New listings always start with [`PropertyStatus::Available`]; status is
/// only changed through updates by the owner.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewProperty {
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
    pub kind: Option<PropertyKind>,
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
}

/// Data for updating a listing.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateProperty {
    /// Listing headline.
    pub title: Option<String>,
    /// Long-form listing description.
    pub description: Option<String>,
    /// Asking price in the listing currency.
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
    pub bedrooms: Option<i32>,
    /// Number of bathrooms.
    pub bathrooms: Option<f64>,
    /// Interior area in square feet.
    pub square_feet: Option<i32>,
    /// Year of construction.
    pub year_built: Option<i32>,
    /// Lot size in acres.
    pub lot_size: Option<f64>,
    /// Free-form feature tags.
    pub features: Option<Vec<String>>,
    /// Gallery image URLs.
    pub image_urls: Option<Vec<String>>,
    /// Virtual tour URL.
    pub tour_url: Option<String>,
}

impl Property {
    /// Returns whether the listing has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns whether the given account owns this listing.
    ///
    /// Ownership is the sole authorization rule for listing mutations.
    pub fn is_owned_by(&self, account_id: Uuid) -> bool {
        self.owner_id == account_id
    }

    /// Returns whether the listing is open to prospective buyers.
    pub fn is_open(&self) -> bool {
        self.status.is_open() && !self.is_deleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_property(owner_id: Uuid) -> Property {
        Property {
            id: Uuid::new_v4(),
            owner_id,
            title: "Craftsman near the park".to_string(),
            description: String::new(),
            price: 425_000.0,
            street_address: "12 Alder Ln".to_string(),
            city: "Portland".to_string(),
            state_region: "OR".to_string(),
            postal_code: "97201".to_string(),
            country: "US".to_string(),
            kind: PropertyKind::House,
            status: PropertyStatus::Available,
            bedrooms: 3,
            bathrooms: 2.5,
            square_feet: 1850,
            year_built: 1926,
            lot_size: 0.12,
            features: vec!["porch".to_string()],
            image_urls: Vec::new(),
            tour_url: None,
            created_at: jiff::Timestamp::UNIX_EPOCH.into(),
            updated_at: jiff::Timestamp::UNIX_EPOCH.into(),
            deleted_at: None,
        }
    }

    #[test]
    fn ownership_check() {
        let owner = Uuid::new_v4();
        let property = sample_property(owner);
        assert!(property.is_owned_by(owner));
        assert!(!property.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn sold_listing_is_not_open() {
        let mut property = sample_property(Uuid::new_v4());
        assert!(property.is_open());
        property.status = PropertyStatus::Sold;
        assert!(!property.is_open());
    }
}
