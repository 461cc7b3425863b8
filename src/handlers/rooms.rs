use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::room::{RoomEditForm, RoomForm, RoomFormOptions, RoomType};
use crate::store;

pub async fn list_rooms(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let rooms = store::rooms::list_rooms(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(rooms))
}

pub async fn add_room_form() -> HttpResponse {
    HttpResponse::Ok().json(RoomFormOptions {
        room_types: RoomType::ALL.to_vec(),
    })
}

pub async fn add_room(
    pool: web::Data<SqlitePool>,
    form: web::Json<RoomForm>,
) -> Result<HttpResponse, ApiError> {
    let room = store::rooms::create_room(pool.get_ref(), &form).await?;
    Ok(HttpResponse::Created().json(room))
}

pub async fn edit_room_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let room = store::rooms::get_room(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RoomEditForm {
        room,
        room_types: RoomType::ALL.to_vec(),
    }))
}

pub async fn edit_room(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Json<RoomForm>,
) -> Result<HttpResponse, ApiError> {
    let room = store::rooms::update_room(pool.get_ref(), path.into_inner(), &form).await?;
    Ok(HttpResponse::Ok().json(room))
}

pub async fn delete_room(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    store::rooms::delete_room(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Room deleted",
        "id": id
    })))
}
