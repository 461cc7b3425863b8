use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::staff::StaffForm;
use crate::store;

pub async fn list_staff(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let staff = store::staff::list_staff(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(staff))
}

pub async fn add_staff_form() -> HttpResponse {
    HttpResponse::Ok().json(StaffForm::default())
}

pub async fn add_staff(
    pool: web::Data<SqlitePool>,
    form: web::Json<StaffForm>,
) -> Result<HttpResponse, ApiError> {
    let staff = store::staff::create_staff(pool.get_ref(), &form).await?;
    Ok(HttpResponse::Created().json(staff))
}

pub async fn edit_staff_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let staff = store::staff::get_staff(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(staff))
}

pub async fn edit_staff(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Json<StaffForm>,
) -> Result<HttpResponse, ApiError> {
    let staff = store::staff::update_staff(pool.get_ref(), path.into_inner(), &form).await?;
    Ok(HttpResponse::Ok().json(staff))
}

pub async fn delete_staff(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    store::staff::delete_staff(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Staff member deleted",
        "id": id
    })))
}
