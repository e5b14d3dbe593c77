//! Request payload types for all endpoints.

mod authentication;
mod pagination;
mod properties;

pub use authentication::{LoginRequest, RegisterRequest};
pub use pagination::PaginationParams;
pub use properties::{CreatePropertyRequest, SearchPropertiesParams, UpdatePropertyRequest};
