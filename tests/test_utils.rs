use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use job_board::{
    auth::jwt::JwtService,
    constants::DEFAULT_JOBS_COLLECTION,
    middlewares::auth::IdentityMiddleware,
    repositories::document_store::StoredDocument,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment, StoreBackend},
    store::memory::InMemoryDocumentStore,
    AppState,
};
use reqwest::Client;
use std::{net::TcpListener, sync::Arc, time::Duration};

#[allow(dead_code)]
pub struct TestApp {
    pub address: String,
    pub store: InMemoryDocumentStore,
    pub client: Client,
    pub config: AppConfig,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_store(InMemoryDocumentStore::new()).await
    }

    pub async fn spawn_with_store(store: InMemoryDocumentStore) -> Self {
        let config = test_config();

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = web::Data::new(AppState::new(&config, Arc::new(store.clone())));

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(NormalizePath::trim())
                .wrap(IdentityMiddleware)
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(&format!("{}/api/v1/system/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            store,
            client,
            config,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn token_for(&self, user_id: &str) -> String {
        JwtService::new(&self.config)
            .create_jwt(user_id, Some(format!("{}@example.com", user_id)))
            .expect("Failed to create JWT")
    }

    pub async fn stored_jobs(&self) -> Vec<StoredDocument> {
        use job_board::repositories::document_store::DocumentStore;

        self.store
            .fetch_all_documents(DEFAULT_JOBS_COLLECTION)
            .await
            .expect("In-memory store never fails")
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Job Board Test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        worker_count: 1,
        store_backend: StoreBackend::Memory,
        database_url: None,
        firestore_project_id: None,
        firestore_api_key: None,
        firestore_base_url: "http://127.0.0.1:1".to_string(),
        jobs_collection: DEFAULT_JOBS_COLLECTION.to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".into(),
        jwt_expiration_minutes: 5,
    }
}
