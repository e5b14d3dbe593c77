//! Session claims carried inside signed bearer tokens.
//!
//! Tokens are the only session state: no session rows are written, and a
//! claims structure is reconstructed fresh on every validation. Signing uses
//! the process-wide symmetric secret (see [`AuthKeys`]).

use jiff::Timestamp;
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vantage_postgres::model::Account;
use vantage_postgres::types::AccountRole;

use crate::service::AuthKeys;

/// Session claims for authentication tokens.
///
/// Contains the RFC 7519 registered claims this service validates plus the
/// identity claims consumed by downstream handlers. Timestamps are unix
/// seconds, as required for `exp`/`nbf`/`iat` processing.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AuthClaims {
    // Standard (or registered) claims.
    /// Issuer (who created the token).
    #[serde(rename = "iss")]
    issued_by: String,
    /// Audience (who the token is intended for).
    #[serde(rename = "aud")]
    audience: String,

    /// Subject ID (unique identifier of the associated account).
    #[serde(rename = "sub")]
    pub account_id: Uuid,

    /// Issued at (unix seconds).
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Not valid before (unix seconds).
    #[serde(rename = "nbf")]
    pub not_before: i64,
    /// Expiration time (unix seconds).
    #[serde(rename = "exp")]
    pub expires_at: i64,

    // Private (or custom) claims.
    /// Email address of the account at issuance time.
    #[serde(rename = "email")]
    pub email_address: String,
    /// Platform role of the account at issuance time.
    #[serde(rename = "role")]
    pub role: AccountRole,
}

impl AuthClaims {
    /// JWT audience identifier for authentication tokens.
    const JWT_AUDIENCE: &str = "vantage:server";
    /// JWT issuer identifier for authentication tokens.
    const JWT_ISSUER: &str = "vantage";
    /// Fixed token lifetime: 24 hours.
    pub const TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

    /// Creates claims for the given account, issued now.
    ///
    /// Sets `iat = nbf = now` and `exp = now + 24h`.
    pub fn new(account: &Account) -> Self {
        Self::with_issued_at(account, Timestamp::now())
    }

    /// Creates claims for the given account at an explicit issuance instant.
    pub fn with_issued_at(account: &Account, issued_at: Timestamp) -> Self {
        let issued_at = issued_at.as_second();
        Self {
            issued_by: Self::JWT_ISSUER.to_owned(),
            audience: Self::JWT_AUDIENCE.to_owned(),
            account_id: account.id,
            issued_at,
            not_before: issued_at,
            expires_at: issued_at + Self::TOKEN_LIFETIME_SECS,
            email_address: account.email_address.clone(),
            role: account.role,
        }
    }

    /// Checks if the token has expired based on current UTC time.
    #[inline]
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Timestamp::now().as_second()
    }

    /// Returns the issuance instant.
    #[inline]
    pub fn issued_at(&self) -> Timestamp {
        Timestamp::from_second(self.issued_at).unwrap_or(Timestamp::UNIX_EPOCH)
    }

    /// Returns the expiration instant.
    #[inline]
    pub fn expires_at(&self) -> Timestamp {
        Timestamp::from_second(self.expires_at).unwrap_or(Timestamp::UNIX_EPOCH)
    }

    /// Signs these claims into a compact token string.
    ///
    /// # Errors
    ///
    /// Returns the underlying encoding error, which with a symmetric key can
    /// only occur on claim serialization failure.
    pub fn into_token(self, keys: &AuthKeys) -> Result<String, jsonwebtoken::errors::Error> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, &self, keys.encoding_key())
    }

    /// Verifies and decodes a token string into claims.
    ///
    /// Validation covers the signature, the token structure, issuer and
    /// audience, and that the current time lies within `[nbf, exp)`.
    /// Leeway is zero: a token is rejected the second it expires and is not
    /// accepted a second before its not-before mark. This is pure - no
    /// account state is consulted.
    ///
    /// # Errors
    ///
    /// Returns the underlying decoding error for signature, structure, or
    /// time-bound failures.
    pub fn decode(token: &str, keys: &AuthKeys) -> Result<Self, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = true;
        validation.set_audience(&[Self::JWT_AUDIENCE]);
        validation.set_issuer(&[Self::JWT_ISSUER]);
        validation
            .set_required_spec_claims(&["iss", "aud", "sub", "iat", "nbf", "exp", "email", "role"]);

        let token_data = decode::<Self>(token, keys.decoding_key(), &validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> AuthKeys {
        AuthKeys::from_secret(&[0x17u8; 32]).expect("test secret is long enough")
    }

    fn test_account() -> Account {
        Account {
            id: Uuid::new_v4(),
            role: AccountRole::Seller,
            is_active: true,
            first_name: "Noor".to_string(),
            last_name: "Haddad".to_string(),
            email_address: "noor@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            phone_number: None,
            avatar_url: None,
            created_at: Timestamp::UNIX_EPOCH.into(),
            updated_at: Timestamp::UNIX_EPOCH.into(),
            deleted_at: None,
        }
    }

    #[test]
    fn issue_then_validate_round_trip() -> anyhow::Result<()> {
        let keys = test_keys();
        let account = test_account();

        let claims = AuthClaims::new(&account);
        let token = claims.clone().into_token(&keys)?;
        let decoded = AuthClaims::decode(&token, &keys)?;

        assert_eq!(decoded, claims);
        assert_eq!(decoded.account_id, account.id);
        assert_eq!(decoded.email_address, "noor@example.com");
        assert_eq!(decoded.role, AccountRole::Seller);
        assert_eq!(
            decoded.expires_at - decoded.issued_at,
            AuthClaims::TOKEN_LIFETIME_SECS
        );
        Ok(())
    }

    #[test]
    fn expired_token_is_rejected() -> anyhow::Result<()> {
        let keys = test_keys();
        let account = test_account();

        // Issued far enough in the past that the 24h lifetime has elapsed
        let issued = Timestamp::now() - jiff::Span::new().hours(25);
        let claims = AuthClaims::with_issued_at(&account, issued);
        assert!(claims.is_expired());

        let token = claims.into_token(&keys)?;
        assert!(AuthClaims::decode(&token, &keys).is_err());
        Ok(())
    }

    #[test]
    fn not_yet_valid_token_is_rejected() -> anyhow::Result<()> {
        let keys = test_keys();
        let account = test_account();

        // Not-before lies an hour in the future
        let issued = Timestamp::now() + jiff::Span::new().hours(1);
        let claims = AuthClaims::with_issued_at(&account, issued);

        let token = claims.into_token(&keys)?;
        assert!(AuthClaims::decode(&token, &keys).is_err());
        Ok(())
    }

    #[test]
    fn tampered_token_is_rejected() -> anyhow::Result<()> {
        let keys = test_keys();
        let other_keys = AuthKeys::from_secret(&[0x99u8; 32]).unwrap();
        let account = test_account();

        let token = AuthClaims::new(&account).into_token(&other_keys)?;
        assert!(AuthClaims::decode(&token, &keys).is_err());
        Ok(())
    }

    #[test]
    fn garbage_token_is_rejected() {
        let keys = test_keys();
        assert!(AuthClaims::decode("definitely.not.ajwt", &keys).is_err());
        assert!(AuthClaims::decode("", &keys).is_err());
    }
}
