//! Booking lifecycle. Creating or ending a booking flips the linked
//! room between `Free` and `Booked`; the booking row and the status
//! change always commit together or not at all.

use sqlx::{SqliteConnection, SqlitePool};
use validator::Validate;

use super::{StoreError, StoreResult};
use crate::models::booking::{Booking, BookingForm};
use crate::models::room::RoomStatus;

/// Newest first. Ids are monotonic, so this is creation order even
/// after a booking has been edited.
pub async fn list_bookings(pool: &SqlitePool) -> StoreResult<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>("SELECT * FROM booking ORDER BY id DESC")
        .fetch_all(pool)
        .await?;
    Ok(bookings)
}

pub async fn get_booking(pool: &SqlitePool, id: i64) -> StoreResult<Booking> {
    sqlx::query_as::<_, Booking>("SELECT * FROM booking WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound("booking"))
}

/// Books a free room for an existing guest.
pub async fn create_booking(pool: &SqlitePool, form: &BookingForm) -> StoreResult<Booking> {
    form.validate()?;
    let mut tx = pool.begin().await?;

    ensure_guest_exists(&mut *tx, form.guest_id).await?;
    claim_room(&mut *tx, form.room_id).await?;

    let booking = sqlx::query_as::<_, Booking>(
        "INSERT INTO booking (guest_id, room_id) VALUES (?, ?) RETURNING *",
    )
    .bind(form.guest_id)
    .bind(form.room_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(booking)
}

/// Reassigns a booking. When the room changes, the old room is freed
/// and the new one claimed in the same transaction, so a room is
/// `Booked` exactly while a booking references it.
pub async fn update_booking(pool: &SqlitePool, id: i64, form: &BookingForm) -> StoreResult<Booking> {
    form.validate()?;
    let mut tx = pool.begin().await?;

    let current = sqlx::query_as::<_, Booking>("SELECT * FROM booking WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StoreError::NotFound("booking"))?;

    ensure_guest_exists(&mut *tx, form.guest_id).await?;

    if form.room_id != current.room_id {
        claim_room(&mut *tx, form.room_id).await?;
        release_room(&mut *tx, current.room_id).await?;
    }

    let booking = sqlx::query_as::<_, Booking>(
        "UPDATE booking SET guest_id = ?, room_id = ?, date = CURRENT_TIMESTAMP \
         WHERE id = ? RETURNING *",
    )
    .bind(form.guest_id)
    .bind(form.room_id)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(booking)
}

/// Checkout: removes the booking and frees its room. Deleting a booking
/// goes through here as well.
pub async fn end_booking(pool: &SqlitePool, id: i64) -> StoreResult<Booking> {
    let mut tx = pool.begin().await?;

    let booking = sqlx::query_as::<_, Booking>("SELECT * FROM booking WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StoreError::NotFound("booking"))?;

    sqlx::query("DELETE FROM booking WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    release_room(&mut *tx, booking.room_id).await?;

    tx.commit().await?;
    Ok(booking)
}

async fn ensure_guest_exists(conn: &mut SqliteConnection, guest_id: i64) -> StoreResult<()> {
    let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM guest WHERE id = ?")
        .bind(guest_id)
        .fetch_one(&mut *conn)
        .await?;
    if found == 0 {
        return Err(StoreError::NotFound("guest"));
    }
    Ok(())
}

/// Flips the room `Free` -> `Booked`. The status check and the write are
/// a single statement, so two concurrent claims cannot both succeed.
async fn claim_room(conn: &mut SqliteConnection, room_id: i64) -> StoreResult<()> {
    let result = sqlx::query(
        "UPDATE room SET room_status = ?, date = CURRENT_TIMESTAMP \
         WHERE id = ? AND room_status = ?",
    )
    .bind(RoomStatus::Booked)
    .bind(room_id)
    .bind(RoomStatus::Free)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM room WHERE id = ?")
            .bind(room_id)
            .fetch_one(&mut *conn)
            .await?;
        if found == 0 {
            return Err(StoreError::NotFound("room"));
        }
        return Err(StoreError::RoomUnavailable(room_id));
    }
    Ok(())
}

async fn release_room(conn: &mut SqliteConnection, room_id: i64) -> StoreResult<()> {
    sqlx::query("UPDATE room SET room_status = ?, date = CURRENT_TIMESTAMP WHERE id = ?")
        .bind(RoomStatus::Free)
        .bind(room_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
