use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes, view};
pub use infrastructure::{auth, db, store};

use auth::jwt::JwtService;
use repositories::document_store::DocumentStore;
use settings::{AppConfig, StoreBackend};
use use_cases::jobs::JobBoard;

pub type SharedStore = Arc<dyn DocumentStore>;
pub type AppJobBoard = JobBoard<SharedStore>;

pub struct AppState {
    pub job_board: AppJobBoard,
    pub token_service: JwtService,
    pub store_backend: StoreBackend,
}

impl AppState {
    pub fn new(config: &AppConfig, store: SharedStore) -> Self {
        let token_service = JwtService::new(config);
        let job_board = JobBoard::new(store, config.jobs_collection.clone());

        AppState {
            job_board,
            token_service,
            store_backend: config.store_backend,
        }
    }
}
