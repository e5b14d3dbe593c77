//! Pooled async client and configuration for PostgreSQL.

mod pg_client;
mod pg_config;

pub use pg_client::{PgClient, PgPoolStatus};
pub use pg_config::PgConfig;

/// The deadpool-managed async connection pool.
pub type ConnectionPool =
    diesel_async::pooled_connection::deadpool::Pool<diesel_async::AsyncPgConnection>;

/// A connection checked out of the pool.
///
/// Dereferences to [`AsyncPgConnection`], so repository traits implemented
/// for the connection are callable on it directly.
///
/// [`AsyncPgConnection`]: diesel_async::AsyncPgConnection
pub type PooledConnection =
    diesel_async::pooled_connection::deadpool::Object<diesel_async::AsyncPgConnection>;
