//! HTTP request extractors with improved error handling and validation.
//!
//! # Extractor Categories
//!
//! ## Authentication
//!
//! - [`AuthClaims`] - Session claims carried inside bearer tokens
//! - [`AuthHeader`] - Pure token validation from the Authorization header
//! - [`AuthState`] - Token validation plus credential-store re-check
//!
//! ## Request Data Extraction
//!
//! - [`Json`] - JSON deserialization with uniform error responses
//! - [`ValidateJson`] - JSON extraction with automatic validation

pub mod auth;
pub mod reject;

pub use crate::extract::auth::{AuthClaims, AuthHeader, AuthState};
pub use crate::extract::reject::{Json, ValidateJson};
