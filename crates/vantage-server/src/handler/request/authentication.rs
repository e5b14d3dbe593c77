//! Request payloads for registration and login.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;
use vantage_postgres::types::AccountRole;

use crate::service::NewRegistration;

/// Request payload for registration.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Email address of the new account.
    #[validate(email)]
    pub email_address: String,
    /// Password of the new account. Must satisfy the auth core's minimum
    /// length; rejected here first for a friendlier validation error.
    #[validate(length(min = 8))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Platform role for the new account.
    pub role: AccountRole,
    /// Optional contact phone number.
    pub phone_number: Option<String>,
}

impl RegisterRequest {
    /// Converts the payload into the auth core's registration input.
    pub fn into_registration(self) -> NewRegistration {
        NewRegistration {
            email_address: self.email_address,
            secret: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            phone_number: self.phone_number,
        }
    }
}

/// Request payload for login.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address of the account.
    #[validate(email)]
    pub email_address: String,
    /// Password of the account.
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_validation() {
        let valid = RegisterRequest {
            email_address: "new@example.com".to_string(),
            password: "longsecret1".to_string(),
            first_name: "Kai".to_string(),
            last_name: "Tran".to_string(),
            role: AccountRole::Seller,
            phone_number: None,
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email_address: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "seven77".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());
    }
}
