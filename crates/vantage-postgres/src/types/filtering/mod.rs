//! Query filter types.

mod properties;

pub use properties::PropertyFilter;
