use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::service::ServiceForm;
use crate::store;

pub async fn list_services(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let services = store::services::list_services(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(services))
}

pub async fn add_service_form() -> HttpResponse {
    HttpResponse::Ok().json(ServiceForm::default())
}

pub async fn add_service(
    pool: web::Data<SqlitePool>,
    form: web::Json<ServiceForm>,
) -> Result<HttpResponse, ApiError> {
    let service = store::services::create_service(pool.get_ref(), &form).await?;
    Ok(HttpResponse::Created().json(service))
}

pub async fn edit_service_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let service = store::services::get_service(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(service))
}

pub async fn edit_service(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Json<ServiceForm>,
) -> Result<HttpResponse, ApiError> {
    let service =
        store::services::update_service(pool.get_ref(), path.into_inner(), &form).await?;
    Ok(HttpResponse::Ok().json(service))
}

pub async fn delete_service(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    store::services::delete_service(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Service deleted",
        "id": id
    })))
}
