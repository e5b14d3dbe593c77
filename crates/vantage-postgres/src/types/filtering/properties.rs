//! Search filter for property listing queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{PropertyKind, PropertyStatus};

/// Conditional filters applied to property search queries.
///
/// Every field is optional; unset fields leave the query unconstrained.
/// Free-text and location filters match case-insensitively as substrings,
/// while `min_bedrooms`/`min_bathrooms` are lower bounds.
#[must_use]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PropertyFilter {
    /// Free-text search over title, description, and street address.
    pub query: Option<String>,
    /// Lower bound on the asking price.
    pub min_price: Option<f64>,
    /// Upper bound on the asking price.
    pub max_price: Option<f64>,
    /// Restrict to one property kind.
    pub kind: Option<PropertyKind>,
    /// Restrict to one listing status.
    pub status: Option<PropertyStatus>,
    /// Minimum number of bedrooms.
    pub min_bedrooms: Option<i32>,
    /// Minimum number of bathrooms.
    pub min_bathrooms: Option<f64>,
    /// Substring match on the city name.
    pub city: Option<String>,
    /// Substring match on the state or region name.
    pub state_region: Option<String>,
}

impl PropertyFilter {
    /// Returns whether no filter is set at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the free-text search term as a SQL `ILIKE` pattern, if set.
    ///
    /// Empty or whitespace-only terms are treated as unset.
    pub fn query_pattern(&self) -> Option<String> {
        Self::contains_pattern(self.query.as_deref())
    }

    /// Returns the city filter as a SQL `ILIKE` pattern, if set.
    pub fn city_pattern(&self) -> Option<String> {
        Self::contains_pattern(self.city.as_deref())
    }

    /// Returns the state/region filter as a SQL `ILIKE` pattern, if set.
    pub fn state_region_pattern(&self) -> Option<String> {
        Self::contains_pattern(self.state_region.as_deref())
    }

    fn contains_pattern(term: Option<&str>) -> Option<String> {
        let term = term?.trim();
        if term.is_empty() {
            return None;
        }
        Some(format!("%{}%", term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter() {
        let filter = PropertyFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.query_pattern(), None);
    }

    #[test]
    fn blank_terms_are_unset() {
        let filter = PropertyFilter {
            query: Some("   ".to_string()),
            city: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.query_pattern(), None);
        assert_eq!(filter.city_pattern(), None);
    }

    #[test]
    fn patterns_wrap_terms() {
        let filter = PropertyFilter {
            query: Some("lake view".to_string()),
            city: Some("Austin".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.query_pattern().as_deref(), Some("%lake view%"));
        assert_eq!(filter.city_pattern().as_deref(), Some("%Austin%"));
        assert!(!filter.is_empty());
    }
}
