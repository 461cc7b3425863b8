use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum RoomType {
    Single,
    Couple,
    Family,
    Studio,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Couple,
        RoomType::Family,
        RoomType::Studio,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum RoomStatus {
    Free,
    Booked,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub room_type: RoomType,
    pub room_status: RoomStatus,
    pub date: chrono::NaiveDateTime,
}

/// Rooms are created `Free`; status only changes when a booking starts
/// or ends, so the form carries no status field.
#[derive(Debug, Deserialize, Validate)]
pub struct RoomForm {
    pub room_type: RoomType,
}

#[derive(Debug, Serialize)]
pub struct RoomFormOptions {
    pub room_types: Vec<RoomType>,
}

#[derive(Debug, Serialize)]
pub struct RoomEditForm {
    pub room: Room,
    pub room_types: Vec<RoomType>,
}
