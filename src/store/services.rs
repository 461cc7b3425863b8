use sqlx::SqlitePool;
use validator::Validate;

use super::{StoreError, StoreResult};
use crate::models::service::{Service, ServiceForm};

pub async fn list_services(pool: &SqlitePool) -> StoreResult<Vec<Service>> {
    let services = sqlx::query_as::<_, Service>("SELECT * FROM service ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(services)
}

pub async fn get_service(pool: &SqlitePool, id: i64) -> StoreResult<Service> {
    sqlx::query_as::<_, Service>("SELECT * FROM service WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound("service"))
}

pub async fn create_service(pool: &SqlitePool, form: &ServiceForm) -> StoreResult<Service> {
    form.validate()?;
    let service = sqlx::query_as::<_, Service>(
        "INSERT INTO service (name, description) VALUES (?, ?) RETURNING *",
    )
    .bind(&form.name)
    .bind(&form.description)
    .fetch_one(pool)
    .await?;
    Ok(service)
}

pub async fn update_service(pool: &SqlitePool, id: i64, form: &ServiceForm) -> StoreResult<Service> {
    form.validate()?;
    sqlx::query_as::<_, Service>(
        "UPDATE service SET name = ?, description = ?, date = CURRENT_TIMESTAMP \
         WHERE id = ? RETURNING *",
    )
    .bind(&form.name)
    .bind(&form.description)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound("service"))
}

pub async fn delete_service(pool: &SqlitePool, id: i64) -> StoreResult<()> {
    let result = sqlx::query("DELETE FROM service WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("service"));
    }
    Ok(())
}
