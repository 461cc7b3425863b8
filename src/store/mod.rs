//! Data access layer. Every operation takes the pool explicitly; there
//! is no process-wide store handle. Cascade rules live in the delete
//! functions rather than in the schema.

pub mod bookings;
pub mod guests;
pub mod reports;
pub mod rooms;
pub mod services;
pub mod staff;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Unknown id on a read, edit, delete, or checkout.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Attempt to book a room that already has an active booking.
    #[error("room {0} is already booked")]
    RoomUnavailable(i64),

    /// A form field failed validation.
    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
