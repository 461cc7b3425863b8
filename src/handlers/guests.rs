use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::guest::GuestForm;
use crate::store;

pub async fn list_guests(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let guests = store::guests::list_guests(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(guests))
}

pub async fn add_guest_form() -> HttpResponse {
    HttpResponse::Ok().json(GuestForm::default())
}

pub async fn add_guest(
    pool: web::Data<SqlitePool>,
    form: web::Json<GuestForm>,
) -> Result<HttpResponse, ApiError> {
    let guest = store::guests::create_guest(pool.get_ref(), &form).await?;
    Ok(HttpResponse::Created().json(guest))
}

pub async fn edit_guest_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let guest = store::guests::get_guest(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(guest))
}

pub async fn edit_guest(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Json<GuestForm>,
) -> Result<HttpResponse, ApiError> {
    let guest = store::guests::update_guest(pool.get_ref(), path.into_inner(), &form).await?;
    Ok(HttpResponse::Ok().json(guest))
}

pub async fn delete_guest(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    store::guests::delete_guest(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Guest deleted",
        "id": id
    })))
}
