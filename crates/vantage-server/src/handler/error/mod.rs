//! HTTP error types and conversions from domain errors.

mod auth_error;
mod http_error;
mod media_error;
mod pg_error;

pub use http_error::{Error, ErrorKind, Result};
