use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user as stored in `users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Already hashed by the caller, never inspected here
    pub password: String,
}

/// Fields supplied when registering a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Price in cents
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Property fields supplied by an owner; `id` is assigned by the database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// A property as returned by a search, with its mean review rating.
///
/// `average_rating` is `None` for properties nobody has reviewed yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// A booking of a property by a guest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub property_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A past reservation joined with the property it was for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuestReservation {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub city: String,
    pub province: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub average_rating: Option<f64>,
}
