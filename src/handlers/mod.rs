use actix_web::{web, HttpResponse};

pub mod bookings;
pub mod guests;
pub mod reports;
pub mod rooms;
pub mod services;
pub mod staff;

/// Wires the whole route table. `main` and the integration tests both
/// build their `App` through this, so they serve the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/guests")
            .route("", web::get().to(guests::list_guests))
            .route("/add", web::get().to(guests::add_guest_form))
            .route("/add", web::post().to(guests::add_guest))
            .route("/edit/{id}", web::get().to(guests::edit_guest_form))
            .route("/edit/{id}", web::post().to(guests::edit_guest))
            .route("/delete/{id}", web::post().to(guests::delete_guest)),
    )
    .service(
        web::scope("/rooms")
            .route("", web::get().to(rooms::list_rooms))
            .route("/add", web::get().to(rooms::add_room_form))
            .route("/add", web::post().to(rooms::add_room))
            .route("/edit/{id}", web::get().to(rooms::edit_room_form))
            .route("/edit/{id}", web::post().to(rooms::edit_room))
            .route("/delete/{id}", web::post().to(rooms::delete_room)),
    )
    .service(
        web::scope("/bookings")
            .route("", web::get().to(bookings::list_bookings))
            .route("/add", web::get().to(bookings::add_booking_form))
            .route("/add", web::post().to(bookings::add_booking))
            .route("/edit/{id}", web::get().to(bookings::edit_booking_form))
            .route("/edit/{id}", web::post().to(bookings::edit_booking))
            .route("/delete/{id}", web::post().to(bookings::delete_booking))
            .route("/checkout/{id}", web::post().to(bookings::checkout)),
    )
    .service(
        web::scope("/services")
            .route("", web::get().to(services::list_services))
            .route("/add", web::get().to(services::add_service_form))
            .route("/add", web::post().to(services::add_service))
            .route("/edit/{id}", web::get().to(services::edit_service_form))
            .route("/edit/{id}", web::post().to(services::edit_service))
            .route("/delete/{id}", web::post().to(services::delete_service)),
    )
    .service(
        web::scope("/staff")
            .route("", web::get().to(staff::list_staff))
            .route("/add", web::get().to(staff::add_staff_form))
            .route("/add", web::post().to(staff::add_staff))
            .route("/edit/{id}", web::get().to(staff::edit_staff_form))
            .route("/edit/{id}", web::post().to(staff::edit_staff))
            .route("/delete/{id}", web::post().to(staff::delete_staff)),
    )
    .service(
        web::scope("/reports")
            .route("/summary", web::get().to(reports::summary))
            .route("/guests.csv", web::get().to(reports::guests_csv)),
    )
    .route("/health", web::get().to(health));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "healthy" }))
}
