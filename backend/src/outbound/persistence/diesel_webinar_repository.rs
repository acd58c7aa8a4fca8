//! PostgreSQL-backed `WebinarRepository` implementation using Diesel ORM.
//!
//! Rows map one-to-one onto [`Webinar`]. Seat counts are stored as `INTEGER`
//! and converted at the boundary; a stored value outside `u32` is reported as
//! a query error rather than silently clamped.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{WebinarRepository, WebinarRepositoryError};
use crate::domain::{UserId, Webinar, WebinarId, WebinarProps};

use super::models::{NewWebinarRow, WebinarRow, WebinarUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::webinars;

/// Diesel-backed implementation of the `WebinarRepository` port.
#[derive(Clone)]
pub struct DieselWebinarRepository {
    pool: DbPool,
}

impl DieselWebinarRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> WebinarRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            WebinarRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: DieselError) -> WebinarRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => WebinarRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => WebinarRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            WebinarRepositoryError::connection("database connection error")
        }
        _ => WebinarRepositoryError::query("database error"),
    }
}

/// Like [`map_diesel_error`], but a unique violation means the id is taken.
fn map_insert_error(error: DieselError, id: &WebinarId) -> WebinarRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            WebinarRepositoryError::duplicate_key(id.as_ref())
        }
        other => map_diesel_error(other),
    }
}

fn seats_to_db(seats: u32) -> Result<i32, WebinarRepositoryError> {
    i32::try_from(seats)
        .map_err(|_| WebinarRepositoryError::query("seat count exceeds storage range"))
}

fn row_to_webinar(row: WebinarRow) -> Result<Webinar, WebinarRepositoryError> {
    let invalid = |err: &dyn std::fmt::Display| {
        WebinarRepositoryError::query(format!("stored webinar {} is invalid: {err}", row.id))
    };

    let props = WebinarProps {
        id: WebinarId::new(row.id.clone()).map_err(|err| invalid(&err))?,
        organizer_id: UserId::new(row.organizer_id.clone()).map_err(|err| invalid(&err))?,
        title: row.title.clone(),
        start_date: row.start_date,
        end_date: row.end_date,
        seats: u32::try_from(row.seats).map_err(|err| invalid(&err))?,
    };
    Webinar::new(props).map_err(|err| invalid(&err))
}

#[async_trait]
impl WebinarRepository for DieselWebinarRepository {
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, WebinarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WebinarRow> = webinars::table
            .filter(webinars::id.eq(id.as_ref()))
            .select(WebinarRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_webinar).transpose()
    }

    async fn create(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let new_row = NewWebinarRow {
            id: webinar.id().as_ref(),
            organizer_id: webinar.organizer_id().as_ref(),
            title: webinar.title(),
            start_date: webinar.start_date(),
            end_date: webinar.end_date(),
            seats: seats_to_db(webinar.seats())?,
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(webinars::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, webinar.id()))?;
        Ok(())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let changes = WebinarUpdate {
            organizer_id: webinar.organizer_id().as_ref(),
            title: webinar.title(),
            start_date: webinar.start_date(),
            end_date: webinar.end_date(),
            seats: seats_to_db(webinar.seats())?,
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated_rows = diesel::update(webinars::table.find(webinar.id().as_ref()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated_rows == 0 {
            return Err(WebinarRepositoryError::not_found(webinar.id().as_ref()));
        }
        Ok(())
    }
}
