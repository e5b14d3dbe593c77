//! Credential store interface consumed by the authentication core.

use std::future::Future;

use uuid::Uuid;
use vantage_postgres::model::{Account, NewAccount};
use vantage_postgres::query::AccountRepository;
use vantage_postgres::{PgConnection, PgResult};

/// The persistent account mapping the authentication core depends on.
///
/// The core needs exactly four operations: lookup by email (login), lookup
/// by id (token re-validation and profile reads), an existence probe, and
/// insert (registration). The production implementation is the PostgreSQL
/// connection; tests supply an in-memory implementation.
///
/// Implementations are responsible for transactional integrity of inserts:
/// a race between two inserts for the same email must be resolved by the
/// store's uniqueness enforcement, surfacing a unique-violation error to the
/// loser.
pub trait CredentialStore: Send {
    /// Finds an account by email address, excluding deleted accounts.
    fn find_account_by_email(
        &mut self,
        email: &str,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;

    /// Finds an account by its unique identifier, excluding deleted accounts.
    fn find_account_by_id(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;

    /// Checks whether an account with this email address already exists.
    fn email_exists(&mut self, email: &str) -> impl Future<Output = PgResult<bool>> + Send;

    /// Inserts a new account as a single atomic write.
    fn insert_account(
        &mut self,
        new_account: NewAccount,
    ) -> impl Future<Output = PgResult<Account>> + Send;
}

impl CredentialStore for PgConnection {
    async fn find_account_by_email(&mut self, email: &str) -> PgResult<Option<Account>> {
        AccountRepository::find_account_by_email(self, email).await
    }

    async fn find_account_by_id(&mut self, account_id: Uuid) -> PgResult<Option<Account>> {
        AccountRepository::find_account_by_id(self, account_id).await
    }

    async fn email_exists(&mut self, email: &str) -> PgResult<bool> {
        AccountRepository::email_exists(self, email).await
    }

    async fn insert_account(&mut self, new_account: NewAccount) -> PgResult<Account> {
        AccountRepository::create_account(self, new_account).await
    }
}
