//! Handlers for the users collection and the random-user endpoint.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::constants::{MSG_USERS_ADDED, MSG_USERS_DELETED, MSG_USERS_UPDATED};
use crate::errors::ApiError;
use crate::models::{UserPayload, UserResponse};
use crate::services::UserService;

/// List all users
#[utoipa::path(
    get,
    path = "/api/userss",
    tag = "Users",
    responses(
        (status = 200, description = "All users in storage order", body = [UserResponse]),
        (status = 400, description = "Storage failure, as \"Error: <message>\"", body = String)
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users: Vec<UserResponse> = user_service
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(users))
}

/// Get a user by storage key
///
/// Responds with `null` when no user has the key.
#[utoipa::path(
    get,
    path = "/api/userss/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Storage key (ObjectId hex)")
    ),
    responses(
        (status = 200, description = "The user, or null", body = UserResponse),
        (status = 400, description = "Malformed key or storage failure", body = String)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let key = path.into_inner();
    let user = user_service.get_user(&key).await?.map(UserResponse::from);
    if user.is_none() {
        debug!("No user with key {}", key);
    }
    Ok(HttpResponse::Ok().json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/userss/add",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "\"Users added!\"", body = String),
        (status = 400, description = "Validation or storage failure", body = String)
    )
)]
pub async fn add_user(
    user_service: web::Data<UserService>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    user_service.create_user(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MSG_USERS_ADDED))
}

/// Replace all fields of a user
#[utoipa::path(
    put,
    path = "/api/userss/update/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Storage key (ObjectId hex)")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "\"Users updated!\"", body = String),
        (status = 400, description = "Unknown user, validation or storage failure", body = String)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    user_service
        .update_user(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MSG_USERS_UPDATED))
}

/// Delete a user
///
/// Succeeds even when no user has the key.
#[utoipa::path(
    delete,
    path = "/api/userss/delete/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Storage key (ObjectId hex)")
    ),
    responses(
        (status = 200, description = "\"Users deleted.\"", body = String),
        (status = 400, description = "Malformed key or storage failure", body = String)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    user_service.delete_user(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MSG_USERS_DELETED))
}

/// Get a uniformly random user
#[utoipa::path(
    get,
    path = "/api/getrandomuser",
    tag = "Users",
    responses(
        (status = 200, description = "A random user", body = UserResponse),
        (status = 404, description = "The collection is empty", body = crate::models::ErrorBody),
        (status = 500, description = "Unexpected failure", body = crate::models::ErrorBody)
    )
)]
pub async fn get_random_user(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service
        .random_user()
        .await
        .map_err(ApiError::into_server)?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
