use sqlx::SqlitePool;
use validator::Validate;

use super::{StoreError, StoreResult};
use crate::models::staff::{Staff, StaffForm};

pub async fn list_staff(pool: &SqlitePool) -> StoreResult<Vec<Staff>> {
    let staff = sqlx::query_as::<_, Staff>("SELECT * FROM staff ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(staff)
}

pub async fn get_staff(pool: &SqlitePool, id: i64) -> StoreResult<Staff> {
    sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound("staff member"))
}

pub async fn create_staff(pool: &SqlitePool, form: &StaffForm) -> StoreResult<Staff> {
    form.validate()?;
    let staff = sqlx::query_as::<_, Staff>(
        "INSERT INTO staff (fullname, contact, role) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(&form.fullname)
    .bind(&form.contact)
    .bind(&form.role)
    .fetch_one(pool)
    .await?;
    Ok(staff)
}

pub async fn update_staff(pool: &SqlitePool, id: i64, form: &StaffForm) -> StoreResult<Staff> {
    form.validate()?;
    sqlx::query_as::<_, Staff>(
        "UPDATE staff SET fullname = ?, contact = ?, role = ?, date = CURRENT_TIMESTAMP \
         WHERE id = ? RETURNING *",
    )
    .bind(&form.fullname)
    .bind(&form.contact)
    .bind(&form.role)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound("staff member"))
}

pub async fn delete_staff(pool: &SqlitePool, id: i64) -> StoreResult<()> {
    let result = sqlx::query("DELETE FROM staff WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("staff member"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_form(fullname: &str, contact: &str, role: &str) -> StaffForm {
        StaffForm {
            fullname: fullname.to_string(),
            contact: contact.to_string(),
            role: role.to_string(),
        }
    }

    #[sqlx::test]
    async fn create_update_delete_round(pool: SqlitePool) {
        let created = create_staff(&pool, &staff_form("Mary Seacole", "mary@example.com", "Nurse"))
            .await
            .unwrap();

        let updated = update_staff(
            &pool,
            created.id,
            &staff_form("Mary Seacole", "mary@example.com", "Head Nurse"),
        )
        .await
        .unwrap();
        assert_eq!(updated.role, "Head Nurse");

        delete_staff(&pool, created.id).await.unwrap();
        assert!(list_staff(&pool).await.unwrap().is_empty());
    }

    #[sqlx::test]
    async fn rejects_blank_role(pool: SqlitePool) {
        let err = create_staff(&pool, &staff_form("Mary Seacole", "mary@example.com", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[sqlx::test]
    async fn update_of_unknown_staff_is_not_found(pool: SqlitePool) {
        let err = update_staff(&pool, 11, &staff_form("Nobody", "n@example.com", "Porter"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
