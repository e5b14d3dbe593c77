//! Database models for all entities in the system.
//!
//! Each model file provides the `Queryable` row type plus the `Insertable`
//! and `AsChangeset` companions used by the repositories in [`crate::query`].

mod account;
mod media_file;
mod property;

pub use account::{Account, NewAccount, UpdateAccount};
pub use media_file::{MediaFile, NewMediaFile};
pub use property::{NewProperty, Property, UpdateProperty};
