use sqlx::SqlitePool;
use validator::Validate;

use super::{StoreError, StoreResult};
use crate::models::guest::{Guest, GuestForm};
use crate::models::room::RoomStatus;

pub async fn list_guests(pool: &SqlitePool) -> StoreResult<Vec<Guest>> {
    let guests = sqlx::query_as::<_, Guest>("SELECT * FROM guest ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(guests)
}

pub async fn get_guest(pool: &SqlitePool, id: i64) -> StoreResult<Guest> {
    sqlx::query_as::<_, Guest>("SELECT * FROM guest WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound("guest"))
}

pub async fn create_guest(pool: &SqlitePool, form: &GuestForm) -> StoreResult<Guest> {
    form.validate()?;
    let guest =
        sqlx::query_as::<_, Guest>("INSERT INTO guest (fullname, contact) VALUES (?, ?) RETURNING *")
            .bind(&form.fullname)
            .bind(&form.contact)
            .fetch_one(pool)
            .await?;
    Ok(guest)
}

pub async fn update_guest(pool: &SqlitePool, id: i64, form: &GuestForm) -> StoreResult<Guest> {
    form.validate()?;
    sqlx::query_as::<_, Guest>(
        "UPDATE guest SET fullname = ?, contact = ?, date = CURRENT_TIMESTAMP \
         WHERE id = ? RETURNING *",
    )
    .bind(&form.fullname)
    .bind(&form.contact)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound("guest"))
}

/// Deletes a guest and cascades: every room held by one of the guest's
/// bookings goes back to `Free`, the bookings are removed, then the
/// guest row. All of it in one transaction.
pub async fn delete_guest(pool: &SqlitePool, id: i64) -> StoreResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "UPDATE room SET room_status = ?, date = CURRENT_TIMESTAMP \
         WHERE id IN (SELECT room_id FROM booking WHERE guest_id = ?)",
    )
    .bind(RoomStatus::Free)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM booking WHERE guest_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM guest WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("guest"));
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingForm;
    use crate::models::room::{RoomForm, RoomType};
    use crate::store::{bookings, rooms};

    fn guest_form(fullname: &str, contact: &str) -> GuestForm {
        GuestForm {
            fullname: fullname.to_string(),
            contact: contact.to_string(),
        }
    }

    #[sqlx::test]
    async fn creates_and_fetches_a_guest(pool: SqlitePool) {
        let created = create_guest(&pool, &guest_form("Ada Lovelace", "ada@example.com"))
            .await
            .unwrap();

        let fetched = get_guest(&pool, created.id).await.unwrap();
        assert_eq!(fetched.fullname, "Ada Lovelace");
        assert_eq!(fetched.contact, "ada@example.com");
    }

    #[sqlx::test]
    async fn rejects_empty_fields(pool: SqlitePool) {
        let err = create_guest(&pool, &guest_form("", "ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(list_guests(&pool).await.unwrap().is_empty());
    }

    #[sqlx::test]
    async fn update_touches_the_timestamp(pool: SqlitePool) {
        let created = create_guest(&pool, &guest_form("Ada Lovelace", "ada@example.com"))
            .await
            .unwrap();

        let updated = update_guest(&pool, created.id, &guest_form("Ada King", "ada@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.fullname, "Ada King");
        assert!(updated.date >= created.date);
    }

    #[sqlx::test]
    async fn update_of_unknown_guest_is_not_found(pool: SqlitePool) {
        let err = update_guest(&pool, 42, &guest_form("Nobody", "nobody@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound("guest")));
    }

    #[sqlx::test]
    async fn delete_cascades_bookings_and_frees_rooms(pool: SqlitePool) {
        let guest = create_guest(&pool, &guest_form("Ada Lovelace", "ada@example.com"))
            .await
            .unwrap();
        let room = rooms::create_room(
            &pool,
            &RoomForm {
                room_type: RoomType::Single,
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

        delete_guest(&pool, guest.id).await.unwrap();

        assert!(bookings::list_bookings(&pool).await.unwrap().is_empty());
        let room = rooms::get_room(&pool, room.id).await.unwrap();
        assert_eq!(room.room_status, RoomStatus::Free);
    }

    #[sqlx::test]
    async fn delete_of_unknown_guest_is_not_found(pool: SqlitePool) {
        let err = delete_guest(&pool, 7).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound("guest")));
    }
}
