use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to decode row: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected row shape: {0}")]
    RowShape(String),

    #[error("insert into {0} returned no row")]
    MissingReturning(&'static str),
}
