use crate::config::DatabaseConfig;
use crate::database::error::QueryError;
use crate::database::traits::QueryExecutor;
use crate::database::types::{Row, SqlParam};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;
use std::time::Duration;
use tracing::{debug, info};

/// `QueryExecutor` backed by an sqlx Postgres pool
#[derive(Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    /// Open a connection pool using `config`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, QueryError> {
        info!(
            "Connecting to database {} on {}:{}",
            config.database, config.host, config.port
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url())
            .await?;

        Ok(Self::new(pool))
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Wrap a statement so each produced row comes back as one JSON object.
/// Works for plain SELECTs as well as `INSERT ... RETURNING`.
fn as_json_rows(sql: &str) -> String {
    let statement = sql.trim().trim_end_matches(';');
    format!("WITH result AS ({statement}) SELECT to_jsonb(result) AS row FROM result")
}

fn into_row(value: Value) -> Result<Row, QueryError> {
    match value {
        Value::Object(row) => Ok(row),
        other => Err(QueryError::RowShape(format!("expected an object, got {other}"))),
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<Row>, QueryError> {
        debug!("Executing query with {} params: {}", params.len(), sql);

        let wrapped = as_json_rows(sql);
        let mut query = sqlx::query_scalar::<_, Json<Value>>(&wrapped);
        for param in params {
            query = match param {
                SqlParam::Text(text) => query.bind(text.clone()),
                SqlParam::Int(number) => query.bind(*number),
            };
        }

        let values = query.fetch_all(&self.pool).await?;
        debug!("Query returned {} rows", values.len());

        values.into_iter().map(|Json(value)| into_row(value)).collect()
    }
}
