use actix_web::{web, HttpResponse};
use serde_json::Value;
use crate::{
    database::DocumentStore,
    models::{EmailQuery, InsertOneAck, UpdateAck, UpdateUserRequest, UserExistsResponse},
    services::user_service::{self, CreateUserOutcome},
    utils::error::AppError,
};

/// GET /users?email= - lista usuários, opcionalmente por email
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(EmailQuery),
    responses(
        (status = 200, description = "Matching users"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_users(
    store: web::Data<dyn DocumentStore>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /users - email={:?}", query.email);
    let users = user_service::list_users(store.get_ref(), query.email.as_deref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// POST /users - cadastra se o email ainda não existir
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "User inserted, or `{message}` when the email is already registered", body = InsertOneAck),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_user(
    store: web::Data<dyn DocumentStore>,
    user: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 POST /users");
    match user_service::create_user(store.get_ref(), user.into_inner()).await? {
        CreateUserOutcome::Inserted(ack) => Ok(HttpResponse::Ok().json(ack)),
        CreateUserOutcome::AlreadyExists => Ok(HttpResponse::Ok().json(UserExistsResponse::default())),
    }
}

/// PATCH /users - a rota não tem id, então nenhum usuário é alterado
#[utoipa::path(
    patch,
    path = "/users",
    tag = "Users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Update acknowledgement (never matches a user)", body = UpdateAck),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_user(
    store: web::Data<dyn DocumentStore>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::warn!("⚠️  PATCH /users called without a user id; no document will match");
    let ack = user_service::update_user(store.get_ref(), request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}
