// ==================== USERS ====================
// Cadastro simples: o email é único por verificação antes do insert
// (não há índice único no banco).

use crate::{
    database::{collections, DocumentStore},
    models::{InsertOneAck, UpdateAck, UpdateUserRequest},
    utils::{documents_to_json, error::AppError, json_to_document},
};
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde_json::Value;

pub enum CreateUserOutcome {
    Inserted(InsertOneAck),
    AlreadyExists,
}

/// Lista usuários; com email, filtra por igualdade exata
pub async fn list_users(store: &dyn DocumentStore, email: Option<&str>) -> Result<Value, AppError> {
    let mut filter = Document::new();
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        filter.insert("email", email);
    }
    let users = store.find(collections::USERS, filter).await?;
    Ok(documents_to_json(users))
}

pub async fn create_user(store: &dyn DocumentStore, body: Value) -> Result<CreateUserOutcome, AppError> {
    let user = json_to_document(body)?;
    // Sem email no corpo a busca é por null
    let email = user.get("email").cloned().unwrap_or(Bson::Null);

    if store
        .find_one(collections::USERS, doc! { "email": email.clone() })
        .await?
        .is_some()
    {
        log::info!("ℹ️  User {} already registered", email);
        return Ok(CreateUserOutcome::AlreadyExists);
    }

    let ack = store.insert_one(collections::USERS, user).await?;
    log::info!("✅ User {} created", email);
    Ok(CreateUserOutcome::Inserted(ack))
}

/// PATCH /users não tem segmento de id, então o filtro usa um id recém
/// gerado e nunca encontra documento. Comportamento mantido de propósito
/// para não mudar o contrato da rota sem aviso.
pub async fn update_user(
    store: &dyn DocumentStore,
    request: UpdateUserRequest,
) -> Result<UpdateAck, AppError> {
    let filter = doc! { "_id": ObjectId::new() };
    let update = doc! {
        "$set": {
            "name": request.name,
            "password": request.password,
        }
    };
    store.update_one(collections::USERS, filter, update).await
}
