use actix_web::web;
use log::warn;

use crate::errors::ApiError;
use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api-docs/openapi.json", web::get().to(handlers::openapi_json))
        .service(
            web::scope("/api")
                // Health check
                .route("/health", web::get().to(handlers::health_check))
                // Random pick lives outside the collection prefix
                .route("/getrandomuser", web::get().to(handlers::get_random_user))
                .service(
                    web::scope("/userss")
                        .app_data(json_config())
                        .route("", web::get().to(handlers::get_users))
                        .route("/", web::get().to(handlers::get_users))
                        .route("/add", web::post().to(handlers::add_user))
                        .route("/update/{id}", web::put().to(handlers::update_user))
                        .route("/delete/{id}", web::delete().to(handlers::delete_user))
                        // Must stay last so it does not shadow the routes above
                        .route("/{id}", web::get().to(handlers::get_user)),
                ),
        );
}

/// Render unreadable JSON bodies through the same 400 contract as every
/// other CRUD failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        ApiError::BadRequest(err.to_string()).into()
    })
}
