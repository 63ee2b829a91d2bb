use actix_web::web;

use crate::{handlers::job_page, view::render::PAGE_PATH};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(PAGE_PATH)
            .route(web::get().to(job_page::show_job_page))
            .route(web::post().to(job_page::submit_job_page))
    );
}
