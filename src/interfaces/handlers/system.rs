use actix_web::{get, web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    store_backend: String,
    store_status: String,
    collection: String,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let (status, store_status) = match state.job_board.check_store().await {
        Ok(_) => ("healthy", "OK"),
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            ("degraded", "Unavailable")
        }
    };

    let response = HealthCheckResponse {
        status: status.to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store_backend: state.store_backend.to_string(),
        store_status: store_status.to_string(),
        collection: state.job_board.collection().to_string(),
    };

    if status == "healthy" {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
