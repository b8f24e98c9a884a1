//! Data access for the LightBnB property rental site: users, properties and
//! reservations stored in Postgres.

pub mod config;
pub mod database;
pub mod models;

pub use config::DatabaseConfig;
pub use database::{
    PgExecutor, PropertyQuery, PropertyQueryBuilder, QueryError, QueryExecutor, Repository,
    Row, SearchOptions, SqlParam, DEFAULT_LIMIT,
};
