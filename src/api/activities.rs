use actix_web::{web, HttpResponse};
use crate::{
    database::DocumentStore,
    models::{DeleteAck, EmailQuery, ProgressRequest},
    services::activity_service,
    utils::error::AppError,
};

#[utoipa::path(
    get,
    path = "/my-activities",
    tag = "Activities",
    params(EmailQuery),
    responses(
        (status = 200, description = "Activities of the user"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_my_activities(
    store: web::Data<dyn DocumentStore>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /my-activities - email={:?}", query.email);
    let activities = activity_service::list_for_user(store.get_ref(), query.email.as_deref()).await?;
    Ok(HttpResponse::Ok().json(activities))
}

/// Devolve um array mesmo para um único id
#[utoipa::path(
    get,
    path = "/my-activities/{id}",
    tag = "Activities",
    params(
        ("id" = String, Path, description = "Activity ObjectId")
    ),
    responses(
        (status = 200, description = "Array with the activity, empty if unknown"),
        (status = 404, description = "Malformed id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_activity(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("📋 GET /my-activities/{}", id);
    let activities = activity_service::list_by_id(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(activities))
}

#[utoipa::path(
    delete,
    path = "/my-activities/{id}",
    tag = "Activities",
    params(
        ("id" = String, Path, description = "Activity ObjectId")
    ),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteAck),
        (status = 404, description = "Malformed id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_activity(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /my-activities/{}", id);
    let ack = activity_service::delete_activity(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// PATCH /my-activities/progress/{id} - progress 100 marca como Completed
#[utoipa::path(
    patch,
    path = "/my-activities/progress/{id}",
    tag = "Activities",
    params(
        ("id" = String, Path, description = "Activity ObjectId")
    ),
    request_body = ProgressRequest,
    responses(
        (status = 200, description = "The updated activity"),
        (status = 400, description = "Progress outside 0-100"),
        (status = 404, description = "Malformed or unknown id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_progress(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
    request: web::Json<ProgressRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("📈 PATCH /my-activities/progress/{} - {}%", id, request.progress);
    let activity = activity_service::update_progress(store.get_ref(), &id, request.progress).await?;
    Ok(HttpResponse::Ok().json(activity))
}
