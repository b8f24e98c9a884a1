pub mod error;
pub mod postgres;
pub mod query_builder;
pub mod repository;
pub mod traits;
pub mod types;

pub use error::QueryError;
pub use postgres::PgExecutor;
pub use query_builder::{PropertyQuery, PropertyQueryBuilder};
pub use repository::Repository;
pub use traits::QueryExecutor;
pub use types::{Row, SearchOptions, SqlParam, DEFAULT_LIMIT};
