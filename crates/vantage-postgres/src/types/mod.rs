//! Contains constraints, enumerations and other custom types.

mod constraints;
mod enums;
mod filtering;

pub use constraints::{
    AccountConstraints, ConstraintCategory, ConstraintViolation, MediaFileConstraints,
    PropertyConstraints,
};
pub use enums::{AccountRole, MediaKind, PropertyKind, PropertyStatus};
pub use filtering::PropertyFilter;
