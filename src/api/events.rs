use actix_web::{web, HttpResponse};
use serde_json::Value;
use crate::{
    database::{collections, DocumentStore},
    models::InsertManyAck,
    services::document_service,
    utils::error::AppError,
};

#[utoipa::path(
    get,
    path = "/upcomingEvents",
    tag = "Community",
    responses(
        (status = 200, description = "All upcoming events"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_events(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📅 GET /upcomingEvents");
    let events = document_service::list_all(store.get_ref(), collections::UPCOMING_EVENTS).await?;
    Ok(HttpResponse::Ok().json(events))
}

#[utoipa::path(
    post,
    path = "/upcomingEvents",
    tag = "Community",
    responses(
        (status = 200, description = "Events inserted", body = InsertManyAck),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_events(
    store: web::Data<dyn DocumentStore>,
    events: web::Json<Vec<Value>>,
) -> Result<HttpResponse, AppError> {
    log::info!("📅 POST /upcomingEvents - {} events", events.len());
    let ack = document_service::insert_many(
        store.get_ref(),
        collections::UPCOMING_EVENTS,
        events.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(ack))
}
