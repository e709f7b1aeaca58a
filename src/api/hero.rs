use actix_web::{web, HttpResponse};
use serde_json::Value;
use crate::{
    database::{collections, DocumentStore},
    models::InsertOneAck,
    services::document_service,
    utils::error::AppError,
};

#[utoipa::path(
    post,
    path = "/hero",
    tag = "Community",
    responses(
        (status = 200, description = "Banner inserted", body = InsertOneAck),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_hero(
    store: web::Data<dyn DocumentStore>,
    banner: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("🖼️  POST /hero");
    let ack = document_service::insert_one(store.get_ref(), collections::HERO, banner.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}

#[utoipa::path(
    get,
    path = "/hero",
    tag = "Community",
    responses(
        (status = 200, description = "All hero banners"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_hero(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("🖼️  GET /hero");
    let banners = document_service::list_all(store.get_ref(), collections::HERO).await?;
    Ok(HttpResponse::Ok().json(banners))
}
