use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::guest::Guest;
use crate::models::room::Room;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub guest_id: i64,
    pub room_id: i64,
    pub date: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookingForm {
    #[validate(range(min = 1))]
    pub guest_id: i64,
    #[validate(range(min = 1))]
    pub room_id: i64,
}

/// Choices for the add form: only free rooms are offered.
#[derive(Debug, Serialize)]
pub struct BookingFormOptions {
    pub guests: Vec<Guest>,
    pub rooms: Vec<Room>,
}

/// The edit form offers every room, including the currently assigned one.
#[derive(Debug, Serialize)]
pub struct BookingEditForm {
    pub booking: Booking,
    pub guests: Vec<Guest>,
    pub rooms: Vec<Room>,
}
