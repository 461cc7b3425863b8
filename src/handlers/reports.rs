use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::store;

pub async fn summary(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let report = store::reports::summary_report(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(report))
}

pub async fn guests_csv(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let csv = store::reports::export_guests_csv(pool.get_ref()).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"guests.csv\"",
        ))
        .body(csv))
}
