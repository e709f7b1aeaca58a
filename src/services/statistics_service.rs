use crate::{
    database::{collections, DocumentStore},
    models::{InsertOneAck, StatisticsSnapshot},
    utils::error::AppError,
};
use mongodb::bson;
use serde_json::Value;

/// Acrescenta um novo snapshot com os contadores fixos
pub async fn insert_snapshot(store: &dyn DocumentStore) -> Result<InsertOneAck, AppError> {
    let document = bson::to_document(&StatisticsSnapshot::seed())?;
    store.insert_one(collections::STATISTICS, document).await
}

pub async fn list_snapshots(store: &dyn DocumentStore) -> Result<Value, AppError> {
    crate::services::document_service::list_all(store, collections::STATISTICS).await
}
