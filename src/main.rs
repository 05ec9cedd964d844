mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::core::{Gazetteer, LocalParser, QueryExecutor};
use crate::routes::leads::AppState;
use crate::services::{LeadGenerator, LeadStore, QueryService, RemoteParser};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string()))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting leadscope query service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Shared immutable gazetteer drives generation, parsing, and filtering
    let gazetteer = Arc::new(Gazetteer::default_us());

    // Initialize the lead store and its background refresh task
    let generator = LeadGenerator::new(&gazetteer);
    let store = Arc::new(LeadStore::new(generator, settings.store.capacity));
    store.seed(settings.store.initial_leads).await;
    let _refresh_task =
        store.spawn_refresh(Duration::from_secs(settings.store.refresh_interval_secs));

    info!(
        "Lead store seeded with {} leads (capacity {}, refresh every {}s)",
        settings.store.initial_leads, settings.store.capacity, settings.store.refresh_interval_secs
    );

    // Remote parser is optional; without a credential everything stays local
    let remote = match &settings.parser.api_key {
        Some(api_key) => {
            info!("Remote query parser enabled ({})", settings.parser.model);
            Some(RemoteParser::new(
                settings.parser.endpoint.clone(),
                api_key.clone(),
                settings.parser.model.clone(),
                Duration::from_secs(settings.parser.timeout_secs),
            ))
        }
        None => {
            info!("No parser credential configured, using local parser only");
            None
        }
    };

    let query_service = Arc::new(QueryService::new(
        remote,
        LocalParser::new(Arc::clone(&gazetteer)),
        QueryExecutor::new(Arc::clone(&gazetteer)),
    ));

    // Build application state
    let app_state = AppState {
        store,
        query: query_service,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
