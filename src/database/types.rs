use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Row limit used when the caller does not pass one
pub const DEFAULT_LIMIT: i64 = 10;

/// A single result record: column name to value
pub type Row = Map<String, Value>;

/// Search filters for property listings. Every filter is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchOptions {
    /// Substring of the city name (case-sensitive)
    pub city: Option<String>,
    /// Minimum price per night in dollars
    pub minimum_price_per_night: Option<f64>,
    /// Maximum price per night in dollars
    pub maximum_price_per_night: Option<f64>,
    /// Owner id filter
    pub owner_id: Option<i32>,
    /// Minimum average review rating
    pub minimum_rating: Option<f64>,
}

/// A value bound to a positional `$n` placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlParam {
    Text(String),
    Int(i64),
}

impl SqlParam {
    pub fn text(value: impl Into<String>) -> Self {
        SqlParam::Text(value.into())
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Int(value)
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        SqlParam::Int(value.into())
    }
}
