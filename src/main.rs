use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use search_answer_service::config::Config;
use search_answer_service::handlers::{json_config, not_found};
use search_answer_service::routes::api;
use search_answer_service::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.llm.api_key.is_none() {
        error!("Please set your ANTHROPIC_API_KEY environment variable");
        std::process::exit(1);
    }
    if !config.search.enabled() {
        warn!("SERPER_API_KEY not found. Web search will be disabled.");
        warn!("To enable web search, get a free API key from https://serper.dev/");
    }

    let state = match AppState::from_config(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize answer service: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting search answer service on port {} (model {})",
        config.server.port, config.llm.model
    );

    let allowed_origins = config.security.allowed_origins.clone();
    let max_json_payload_size = config.server.max_json_payload_size;

    // Create HTTP server
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|origin| origin == "*") {
            Cors::default().allow_any_origin()
        } else {
            allowed_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        }
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config(max_json_payload_size))
            .wrap(cors)
            .wrap(Logger::default())
            .service(api::config())
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    // Run the server
    server.workers(config.server.workers).run().await
}
