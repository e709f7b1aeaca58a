use actix_web::{web, HttpResponse};
use serde_json::Value;
use crate::{
    database::DocumentStore,
    models::{
        ChallengeQuery, EmailQuery, InsertOneAck, IsJoinedResponse, JoinChallengeRequest,
        JoinChallengeResponse,
    },
    services::challenge_service,
    utils::error::AppError,
};

/// GET /challenges - filtros: category (a,b), startDate, endDate,
/// minParticipants, maxParticipants
#[utoipa::path(
    get,
    path = "/challenges",
    tag = "Challenges",
    params(ChallengeQuery),
    responses(
        (status = 200, description = "Matching challenges"),
        (status = 400, description = "Non-numeric participant bound"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_challenges(
    store: web::Data<dyn DocumentStore>,
    query: web::Query<ChallengeQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("🏆 GET /challenges - {:?}", query);
    let challenges = challenge_service::list_challenges(store.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(challenges))
}

#[utoipa::path(
    get,
    path = "/ongoing-challenges",
    tag = "Challenges",
    responses(
        (status = 200, description = "Challenges with status Ongoing"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_ongoing_challenges(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("🏆 GET /ongoing-challenges");
    let challenges = challenge_service::list_ongoing(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(challenges))
}

#[utoipa::path(
    get,
    path = "/challenges/{id}",
    tag = "Challenges",
    params(
        ("id" = String, Path, description = "Challenge ObjectId")
    ),
    responses(
        (status = 200, description = "The challenge"),
        (status = 404, description = "Malformed or unknown id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_challenge(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🏆 GET /challenges/{}", id);
    let challenge = challenge_service::get_challenge(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(challenge))
}

#[utoipa::path(
    post,
    path = "/challenges",
    tag = "Challenges",
    responses(
        (status = 200, description = "Challenge inserted", body = InsertOneAck),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_challenge(
    store: web::Data<dyn DocumentStore>,
    challenge: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("🏆 POST /challenges");
    let ack = challenge_service::create_challenge(store.get_ref(), challenge.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// PATCH /challenges/join/{id} - +1 participante e cria a atividade
#[utoipa::path(
    patch,
    path = "/challenges/join/{id}",
    tag = "Challenges",
    params(
        ("id" = String, Path, description = "Challenge ObjectId")
    ),
    request_body = JoinChallengeRequest,
    responses(
        (status = 200, description = "Joined", body = JoinChallengeResponse),
        (status = 404, description = "Malformed or unknown id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn join_challenge(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
    request: web::Json<JoinChallengeRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🤝 PATCH /challenges/join/{} - user {}", id, request.user_email);
    let response = challenge_service::join_challenge(store.get_ref(), &id, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    get,
    path = "/challenges/isJoined/{id}",
    tag = "Challenges",
    params(
        ("id" = String, Path, description = "Challenge id"),
        EmailQuery
    ),
    responses(
        (status = 200, description = "Whether the user has an ongoing activity", body = IsJoinedResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn is_joined(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🔍 GET /challenges/isJoined/{} - email={:?}", id, query.email);
    let response = challenge_service::is_joined(store.get_ref(), &id, query.email.as_deref()).await?;
    Ok(HttpResponse::Ok().json(response))
}
