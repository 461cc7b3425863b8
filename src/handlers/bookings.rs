use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::booking::{BookingEditForm, BookingForm, BookingFormOptions};
use crate::models::room::RoomStatus;
use crate::store;

pub async fn list_bookings(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let bookings = store::bookings::list_bookings(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// The blank form offers every guest but only rooms that are still free.
pub async fn add_booking_form(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let guests = store::guests::list_guests(pool.get_ref()).await?;
    let rooms = store::rooms::list_rooms_by_status(pool.get_ref(), RoomStatus::Free).await?;
    Ok(HttpResponse::Ok().json(BookingFormOptions { guests, rooms }))
}

pub async fn add_booking(
    pool: web::Data<SqlitePool>,
    form: web::Json<BookingForm>,
) -> Result<HttpResponse, ApiError> {
    let booking = store::bookings::create_booking(pool.get_ref(), &form).await?;
    Ok(HttpResponse::Created().json(booking))
}

/// The edit form lists every room, booked ones included, so a booking
/// can keep the room it already has.
pub async fn edit_booking_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let booking = store::bookings::get_booking(pool.get_ref(), path.into_inner()).await?;
    let guests = store::guests::list_guests(pool.get_ref()).await?;
    let rooms = store::rooms::list_rooms(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(BookingEditForm {
        booking,
        guests,
        rooms,
    }))
}

pub async fn edit_booking(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Json<BookingForm>,
) -> Result<HttpResponse, ApiError> {
    let booking =
        store::bookings::update_booking(pool.get_ref(), path.into_inner(), &form).await?;
    Ok(HttpResponse::Ok().json(booking))
}

pub async fn delete_booking(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let booking = store::bookings::end_booking(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Booking deleted",
        "id": id,
        "room_id": booking.room_id
    })))
}

pub async fn checkout(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let booking = store::bookings::end_booking(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Checked out",
        "id": id,
        "room_id": booking.room_id
    })))
}
