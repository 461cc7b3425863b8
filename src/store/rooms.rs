use sqlx::SqlitePool;
use validator::Validate;

use super::{StoreError, StoreResult};
use crate::models::room::{Room, RoomForm, RoomStatus};

pub async fn list_rooms(pool: &SqlitePool) -> StoreResult<Vec<Room>> {
    let rooms = sqlx::query_as::<_, Room>("SELECT * FROM room ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rooms)
}

pub async fn list_rooms_by_status(pool: &SqlitePool, status: RoomStatus) -> StoreResult<Vec<Room>> {
    let rooms = sqlx::query_as::<_, Room>("SELECT * FROM room WHERE room_status = ? ORDER BY id")
        .bind(status)
        .fetch_all(pool)
        .await?;
    Ok(rooms)
}

pub async fn get_room(pool: &SqlitePool, id: i64) -> StoreResult<Room> {
    sqlx::query_as::<_, Room>("SELECT * FROM room WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound("room"))
}

/// New rooms always start out `Free`.
pub async fn create_room(pool: &SqlitePool, form: &RoomForm) -> StoreResult<Room> {
    form.validate()?;
    let room = sqlx::query_as::<_, Room>(
        "INSERT INTO room (room_type, room_status) VALUES (?, ?) RETURNING *",
    )
    .bind(form.room_type)
    .bind(RoomStatus::Free)
    .fetch_one(pool)
    .await?;
    Ok(room)
}

/// Only the room type is editable; status belongs to the booking flow.
pub async fn update_room(pool: &SqlitePool, id: i64, form: &RoomForm) -> StoreResult<Room> {
    form.validate()?;
    sqlx::query_as::<_, Room>(
        "UPDATE room SET room_type = ?, date = CURRENT_TIMESTAMP WHERE id = ? RETURNING *",
    )
    .bind(form.room_type)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound("room"))
}

/// Deletes a room together with its bookings. Nothing is freed: the
/// room itself is going away.
pub async fn delete_room(pool: &SqlitePool, id: i64) -> StoreResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM booking WHERE room_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM room WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("room"));
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingForm;
    use crate::models::guest::GuestForm;
    use crate::models::room::RoomType;
    use crate::store::{bookings, guests};

    fn room_form(room_type: RoomType) -> RoomForm {
        RoomForm { room_type }
    }

    #[sqlx::test]
    async fn new_rooms_are_free(pool: SqlitePool) {
        let room = create_room(&pool, &room_form(RoomType::Studio)).await.unwrap();
        assert_eq!(room.room_type, RoomType::Studio);
        assert_eq!(room.room_status, RoomStatus::Free);
    }

    #[sqlx::test]
    async fn update_changes_type_but_not_status(pool: SqlitePool) {
        let room = create_room(&pool, &room_form(RoomType::Single)).await.unwrap();

        let updated = update_room(&pool, room.id, &room_form(RoomType::Family))
            .await
            .unwrap();
        assert_eq!(updated.room_type, RoomType::Family);
        assert_eq!(updated.room_status, RoomStatus::Free);
    }

    #[sqlx::test]
    async fn filters_rooms_by_status(pool: SqlitePool) {
        let free = create_room(&pool, &room_form(RoomType::Single)).await.unwrap();
        let taken = create_room(&pool, &room_form(RoomType::Couple)).await.unwrap();
        let guest = guests::create_guest(
            &pool,
            &GuestForm {
                fullname: "Ada Lovelace".to_string(),
                contact: "ada@example.com".to_string(),
            },
        )
        .await
        .unwrap();
        bookings::create_booking(
            &pool,
            &BookingForm {
                guest_id: guest.id,
                room_id: taken.id,
            },
        )
        .await
        .unwrap();

        let free_rooms = list_rooms_by_status(&pool, RoomStatus::Free).await.unwrap();
        assert_eq!(free_rooms.len(), 1);
        assert_eq!(free_rooms[0].id, free.id);

        let booked_rooms = list_rooms_by_status(&pool, RoomStatus::Booked).await.unwrap();
        assert_eq!(booked_rooms.len(), 1);
        assert_eq!(booked_rooms[0].id, taken.id);
    }

    #[sqlx::test]
    async fn delete_cascades_to_bookings(pool: SqlitePool) {
        let room = create_room(&pool, &room_form(RoomType::Couple)).await.unwrap();
        let guest = guests::create_guest(
            &pool,
            &GuestForm {
                fullname: "Ada Lovelace".to_string(),
                contact: "ada@example.com".to_string(),
            },
        )
        .await
        .unwrap();
        bookings::create_booking(
            &pool,
            &BookingForm {
                guest_id: guest.id,
                room_id: room.id,
            },
        )
        .await
        .unwrap();

        delete_room(&pool, room.id).await.unwrap();

        assert!(bookings::list_bookings(&pool).await.unwrap().is_empty());
        let err = get_room(&pool, room.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound("room")));
    }

    #[sqlx::test]
    async fn delete_of_unknown_room_is_not_found(pool: SqlitePool) {
        let err = delete_room(&pool, 9).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound("room")));
    }
}
