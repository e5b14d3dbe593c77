//! Structured handling of named database constraint violations.
//!
//! Constraint names raised by PostgreSQL are parsed into typed violations so
//! callers can map them to domain errors (e.g. a unique email violation
//! becoming a duplicate-account error) instead of string-matching.

mod accounts;
mod media_files;
mod properties;

pub use accounts::AccountConstraints;
pub use media_files::MediaFileConstraints;
pub use properties::PropertyConstraints;

/// Broad classification of a constraint violation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConstraintCategory {
    /// A field failed a value-level check.
    Validation,
    /// A timestamp ordering invariant was broken.
    Chronological,
    /// A uniqueness guarantee was violated.
    Uniqueness,
    /// A foreign key reference was invalid.
    Reference,
}

/// A named constraint violation raised by the database, parsed per table.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConstraintViolation {
    /// Violation on the `accounts` table.
    Account(AccountConstraints),
    /// Violation on the `properties` table.
    Property(PropertyConstraints),
    /// Violation on the `media_files` table.
    MediaFile(MediaFileConstraints),
}

impl ConstraintViolation {
    /// Parses a constraint name into a structured violation.
    ///
    /// Returns `None` for constraint names this crate does not know about.
    pub fn new(constraint: &str) -> Option<Self> {
        if let Some(c) = AccountConstraints::new(constraint) {
            return Some(Self::Account(c));
        }
        if let Some(c) = PropertyConstraints::new(constraint) {
            return Some(Self::Property(c));
        }
        if let Some(c) = MediaFileConstraints::new(constraint) {
            return Some(Self::MediaFile(c));
        }
        None
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            Self::Account(c) => c.categorize(),
            Self::Property(c) => c.categorize(),
            Self::MediaFile(c) => c.categorize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_constraints() {
        let violation = ConstraintViolation::new("accounts_email_address_unique_idx");
        assert_eq!(
            violation,
            Some(ConstraintViolation::Account(
                AccountConstraints::EmailAddressUnique
            ))
        );
        assert_eq!(
            violation.map(|v| v.categorize()),
            Some(ConstraintCategory::Uniqueness)
        );

        let violation = ConstraintViolation::new("properties_owner_id_fkey");
        assert_eq!(
            violation,
            Some(ConstraintViolation::Property(
                PropertyConstraints::OwnerReference
            ))
        );
    }

    #[test]
    fn unknown_constraint_is_none() {
        assert_eq!(ConstraintViolation::new("somewhere_else_entirely"), None);
    }
}
