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
    path = "/tips",
    tag = "Community",
    responses(
        (status = 200, description = "All community tips"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_tips(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("💡 GET /tips");
    let tips = document_service::list_all(store.get_ref(), collections::TIPS).await?;
    Ok(HttpResponse::Ok().json(tips))
}

#[utoipa::path(
    post,
    path = "/tips",
    tag = "Community",
    responses(
        (status = 200, description = "Tips inserted", body = InsertManyAck),
        (status = 400, description = "Body is not an array of objects"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_tips(
    store: web::Data<dyn DocumentStore>,
    tips: web::Json<Vec<Value>>,
) -> Result<HttpResponse, AppError> {
    log::info!("💡 POST /tips - {} tips", tips.len());
    let ack = document_service::insert_many(store.get_ref(), collections::TIPS, tips.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}
