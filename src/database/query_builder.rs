//! Assembly of the property search statement.
//!
//! Filters are evaluated in a fixed order; each present filter adds one predicate and one
//! positional parameter, so `$n` always refers to `params[n - 1]`. User input never ends up
//! in the SQL text itself.

use crate::database::types::{SearchOptions, SqlParam, DEFAULT_LIMIT};

const BASE_SELECT: &str = "SELECT properties.*, avg(rating) AS average_rating
FROM properties
LEFT OUTER JOIN property_reviews ON properties.id = property_reviews.property_id";

/// A search filter: when `value` yields something, `clause` is emitted with `{}`
/// replaced by the next placeholder.
struct FilterRule {
    clause: &'static str,
    value: fn(&SearchOptions) -> Option<String>,
}

// Order matters: it fixes both predicate order and placeholder numbering.
const FILTERS: [FilterRule; 4] = [
    FilterRule {
        clause: "city LIKE {}",
        value: city_pattern,
    },
    FilterRule {
        clause: "cost_per_night <= {}::numeric",
        value: maximum_cents,
    },
    FilterRule {
        clause: "cost_per_night >= {}::numeric",
        value: minimum_cents,
    },
    // Inclusive lower bound on the owner id, not an exact match.
    FilterRule {
        clause: "properties.owner_id >= {}::numeric",
        value: owner,
    },
];

fn city_pattern(options: &SearchOptions) -> Option<String> {
    options.city.as_ref().map(|city| format!("%{city}%"))
}

fn maximum_cents(options: &SearchOptions) -> Option<String> {
    options.maximum_price_per_night.map(|dollars| (dollars * 100.0).to_string())
}

fn minimum_cents(options: &SearchOptions) -> Option<String> {
    options.minimum_price_per_night.map(|dollars| (dollars * 100.0).to_string())
}

fn owner(options: &SearchOptions) -> Option<String> {
    options.owner_id.map(|id| id.to_string())
}

fn placeholder(position: usize) -> String {
    format!("${position}")
}

/// A finished statement and the parameters for its placeholders
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Builds the filtered, rating-aggregated property search
pub struct PropertyQueryBuilder<'a> {
    options: &'a SearchOptions,
    limit: i64,
}

impl<'a> PropertyQueryBuilder<'a> {
    pub fn new(options: &'a SearchOptions) -> Self {
        Self {
            options,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(&self) -> PropertyQuery {
        let mut clauses = vec![BASE_SELECT.to_string()];
        let mut params = Vec::new();

        for rule in &FILTERS {
            if let Some(value) = (rule.value)(self.options) {
                params.push(SqlParam::Text(value));
                let keyword = if params.len() == 1 { "WHERE" } else { "AND" };
                let predicate = rule.clause.replace("{}", &placeholder(params.len()));
                clauses.push(format!("{keyword} {predicate}"));
            }
        }

        clauses.push("GROUP BY properties.id".to_string());

        if let Some(rating) = self.options.minimum_rating {
            params.push(SqlParam::Text(rating.to_string()));
            clauses.push(format!(
                "HAVING avg(rating) >= {}::numeric",
                placeholder(params.len())
            ));
        }

        params.push(SqlParam::Int(self.limit));
        clauses.push(format!(
            "ORDER BY cost_per_night LIMIT {}",
            placeholder(params.len())
        ));

        PropertyQuery {
            sql: clauses.join("\n"),
            params,
        }
    }
}
