mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use mongodb::Client;

use crate::config::{Config, StorageBackend};
use crate::repositories::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use crate::services::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let repository = connect_repository(&config).await.map_err(|e| {
        error!("Error connecting to storage: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    let user_service = web::Data::new(UserService::new(repository));

    let server_addr = config.server_addr();
    info!("Users API Server is running on http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}

/// Build the configured repository; for MongoDB, the server must answer a
/// ping before the HTTP listener starts.
async fn connect_repository(
    config: &Config,
) -> Result<Arc<dyn UserRepository>, errors::ApiError> {
    match config.storage_backend {
        StorageBackend::Memory => {
            info!("Using in-memory user storage");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::MongoDb => {
            info!("Connecting to MongoDB...");
            let client = Client::with_uri_str(&config.mongodb_uri).await?;
            let db = client.database(&config.database_name);
            let repository = MongoUserRepository::new(&db, &config.users_collection);
            repository.ping().await?;
            info!(
                "Connected to MongoDB (database: {}, collection: {})",
                config.database_name, config.users_collection
            );
            Ok(Arc::new(repository))
        }
    }
}
