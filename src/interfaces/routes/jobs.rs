use actix_web::web;

use crate::handlers::jobs;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/jobs")
            .route(web::get().to(jobs::list_jobs))
            .route(web::post().to(jobs::create_job))
    );
}
