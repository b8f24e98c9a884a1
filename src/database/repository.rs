//! Data access functions for users, properties and reservations.
//!
//! Each call runs exactly one statement through the injected [`QueryExecutor`]. Failures
//! are logged and handed back as [`QueryError`]; a lookup that matches nothing is `Ok(None)`
//! and a listing that matches nothing is an empty `Vec`.

use crate::database::error::QueryError;
use crate::database::query_builder::PropertyQueryBuilder;
use crate::database::traits::QueryExecutor;
use crate::database::types::{Row, SearchOptions, SqlParam, DEFAULT_LIMIT};
use crate::models::{GuestReservation, NewProperty, NewUser, Property, PropertyListing, User};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

const USER_BY_EMAIL: &str = "SELECT * FROM users WHERE email = $1";

const USER_BY_ID: &str = "SELECT * FROM users WHERE id = $1";

const INSERT_USER: &str = "INSERT INTO users (name, email, password)
VALUES ($1, $2, $3)
RETURNING *";

const PAST_RESERVATIONS: &str = "SELECT reservations.id, reservations.property_id, reservations.guest_id,
  reservations.start_date, reservations.end_date,
  properties.title, properties.description, properties.thumbnail_photo_url,
  properties.cover_photo_url, properties.cost_per_night, properties.city,
  properties.province, properties.country, properties.parking_spaces,
  properties.number_of_bathrooms, properties.number_of_bedrooms,
  avg(rating) AS average_rating
FROM reservations
JOIN properties ON reservations.property_id = properties.id
LEFT OUTER JOIN property_reviews ON properties.id = property_reviews.property_id
WHERE reservations.guest_id = $1
AND reservations.end_date < now()::date
GROUP BY properties.id, reservations.id
ORDER BY reservations.start_date
LIMIT $2";

const INSERT_PROPERTY: &str = "INSERT INTO properties (
  owner_id, title, description, thumbnail_photo_url, cover_photo_url, cost_per_night,
  street, city, province, post_code, country,
  parking_spaces, number_of_bathrooms, number_of_bedrooms
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
RETURNING *";

fn decode<T: DeserializeOwned>(row: Row) -> Result<T, QueryError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}

/// Queries over the LightBnB schema, generic over how statements are executed
pub struct Repository<E> {
    executor: E,
}

impl<E: QueryExecutor> Repository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    async fn run(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<Row>, QueryError> {
        self.executor.execute(sql, params).await.map_err(|err| {
            error!("query error: {}", err);
            err
        })
    }

    async fn fetch_first<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[SqlParam],
    ) -> Result<Option<T>, QueryError> {
        let rows = self.run(sql, params).await?;
        rows.into_iter().next().map(decode).transpose()
    }

    async fn fetch_all<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[SqlParam],
    ) -> Result<Vec<T>, QueryError> {
        let rows = self.run(sql, params).await?;
        rows.into_iter().map(decode).collect()
    }

    async fn insert_returning<T: DeserializeOwned>(
        &self,
        table: &'static str,
        sql: &str,
        params: &[SqlParam],
    ) -> Result<T, QueryError> {
        self.fetch_first(sql, params)
            .await?
            .ok_or(QueryError::MissingReturning(table))
    }

    /// Look up a user by email. Returns the first match, if any.
    pub async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, QueryError> {
        self.fetch_first(USER_BY_EMAIL, &[SqlParam::text(email)]).await
    }

    /// Look up a user by id.
    pub async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, QueryError> {
        self.fetch_first(USER_BY_ID, &[SqlParam::from(id)]).await
    }

    /// Insert a user and return it with its generated id.
    ///
    /// No validation happens here; the caller supplies a non-empty name, email and an
    /// already hashed password.
    pub async fn add_user(&self, user: &NewUser) -> Result<User, QueryError> {
        let params = [
            SqlParam::text(&user.name),
            SqlParam::text(&user.email),
            SqlParam::text(&user.password),
        ];
        self.insert_returning("users", INSERT_USER, &params).await
    }

    /// Completed stays of a guest (`end_date` before today), earliest first.
    pub async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<GuestReservation>, QueryError> {
        let params = [
            SqlParam::from(guest_id),
            SqlParam::Int(limit.unwrap_or(DEFAULT_LIMIT)),
        ];
        self.fetch_all(PAST_RESERVATIONS, &params).await
    }

    /// Search properties, cheapest first.
    pub async fn get_all_properties(
        &self,
        options: &SearchOptions,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, QueryError> {
        let query = PropertyQueryBuilder::new(options)
            .limit(limit.unwrap_or(DEFAULT_LIMIT))
            .build();
        debug!("Property search with {} params", query.params.len());

        self.fetch_all(&query.sql, &query.params).await
    }

    /// Insert a property and return it with its generated id.
    pub async fn add_property(&self, property: &NewProperty) -> Result<Property, QueryError> {
        let params = [
            SqlParam::from(property.owner_id),
            SqlParam::text(&property.title),
            SqlParam::text(&property.description),
            SqlParam::text(&property.thumbnail_photo_url),
            SqlParam::text(&property.cover_photo_url),
            SqlParam::from(property.cost_per_night),
            SqlParam::text(&property.street),
            SqlParam::text(&property.city),
            SqlParam::text(&property.province),
            SqlParam::text(&property.post_code),
            SqlParam::text(&property.country),
            SqlParam::from(property.parking_spaces),
            SqlParam::from(property.number_of_bathrooms),
            SqlParam::from(property.number_of_bedrooms),
        ];
        self.insert_returning("properties", INSERT_PROPERTY, &params).await
    }
}
