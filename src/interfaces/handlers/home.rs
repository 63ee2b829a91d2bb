use actix_web::{get, HttpResponse, Responder};

use crate::view::render::PAGE_PATH;

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Job Board API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "jobs": "/api/v1/jobs",
        "create_job_page": PAGE_PATH
    }))
}
