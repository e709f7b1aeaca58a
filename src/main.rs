mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::database::DocumentStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::Config::from_env().expect("Invalid configuration");

    log::info!("🚀 Starting EcoTrack server...");
    log::info!("📊 Database: {} ({})", config.redacted_uri(), config.database_name);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&config.mongodb_uri, &config.database_name)
        .await
        .expect("Failed to connect to MongoDB");

    let store: Arc<dyn DocumentStore> = Arc::new(db);
    let store_data = web::Data::from(store);

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    let openapi = api::swagger::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(Cors::permissive())
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
