//! Properties table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Property table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum PropertyConstraints {
    // Property validation constraints
    #[strum(serialize = "properties_title_not_empty")]
    TitleNotEmpty,
    #[strum(serialize = "properties_price_non_negative")]
    PriceNonNegative,
    #[strum(serialize = "properties_bedrooms_non_negative")]
    BedroomsNonNegative,

    // Property chronological constraints
    #[strum(serialize = "properties_updated_after_created")]
    UpdatedAfterCreated,

    // Property reference constraints
    #[strum(serialize = "properties_owner_id_fkey")]
    OwnerReference,
}

impl PropertyConstraints {
    /// Creates a new [`PropertyConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            PropertyConstraints::TitleNotEmpty
            | PropertyConstraints::PriceNonNegative
            | PropertyConstraints::BedroomsNonNegative => ConstraintCategory::Validation,

            PropertyConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,

            PropertyConstraints::OwnerReference => ConstraintCategory::Reference,
        }
    }
}

impl From<PropertyConstraints> for String {
    #[inline]
    fn from(val: PropertyConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for PropertyConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
