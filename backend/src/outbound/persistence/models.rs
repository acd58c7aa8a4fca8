//! Diesel row types for the `webinars` table.
//!
//! Internal to the persistence adapter; the domain only ever sees
//! [`crate::domain::Webinar`].

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::webinars;

/// Row read from `webinars`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = webinars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WebinarRow {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

/// Insertable webinar.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = webinars)]
pub(crate) struct NewWebinarRow<'a> {
    pub id: &'a str,
    pub organizer_id: &'a str,
    pub title: &'a str,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

/// Every mutable column; the primary key is the update filter.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = webinars)]
pub(crate) struct WebinarUpdate<'a> {
    pub organizer_id: &'a str,
    pub title: &'a str,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}
