use actix_web::web;

use crate::handlers::home::home;

mod jobs;
mod job_page;
mod system;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.configure(job_page::config_routes);

    cfg.service(
        web::scope("/api/v1")
            .configure(jobs::config_routes)
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
