use crate::database::error::QueryError;
use crate::database::types::{Row, SqlParam};
use async_trait::async_trait;

/// Runs one parameterized statement against the database.
///
/// `params[n - 1]` is bound to the `$n` placeholder in `sql`. Implementations hand back
/// every produced row, in the order the database returned them.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<Row>, QueryError>;
}
