use actix_web::web;

use crate::handlers::json_error::JsonError;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }));
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }));
}
