use actix_web::{web, HttpResponse};
use crate::{
    database::DocumentStore,
    models::InsertOneAck,
    services::statistics_service,
    utils::error::AppError,
};

/// POST /statistics - grava o snapshot fixo (valores não são calculados)
#[utoipa::path(
    post,
    path = "/statistics",
    tag = "Statistics",
    responses(
        (status = 200, description = "Snapshot inserted", body = InsertOneAck),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_statistics(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📊 POST /statistics");
    let ack = statistics_service::insert_snapshot(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(ack))
}

#[utoipa::path(
    get,
    path = "/statistics",
    tag = "Statistics",
    responses(
        (status = 200, description = "All statistics snapshots"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_statistics(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📊 GET /statistics");
    let snapshots = statistics_service::list_snapshots(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(snapshots))
}
