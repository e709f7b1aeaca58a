// Coleções sem formato fixo (tips, upcomingEvent, hero): listar e inserir

use crate::{
    database::DocumentStore,
    models::{InsertManyAck, InsertOneAck},
    utils::{documents_to_json, error::AppError, json_to_document},
};
use mongodb::bson::Document;
use serde_json::Value;

pub async fn list_all(store: &dyn DocumentStore, collection: &str) -> Result<Value, AppError> {
    let docs = store.find(collection, Document::new()).await?;
    log::debug!("📋 {} documents in {}", docs.len(), collection);
    Ok(documents_to_json(docs))
}

pub async fn insert_one(
    store: &dyn DocumentStore,
    collection: &str,
    body: Value,
) -> Result<InsertOneAck, AppError> {
    let document = json_to_document(body)?;
    store.insert_one(collection, document).await
}

/// Insere um array de documentos de uma vez
pub async fn insert_many(
    store: &dyn DocumentStore,
    collection: &str,
    items: Vec<Value>,
) -> Result<InsertManyAck, AppError> {
    let documents = items
        .into_iter()
        .map(json_to_document)
        .collect::<Result<Vec<_>, _>>()?;
    store.insert_many(collection, documents).await
}
