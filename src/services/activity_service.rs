use crate::{
    database::{collections, DocumentStore},
    models::{ActivityType, DeleteAck},
    utils::{document_to_json, documents_to_json, error::AppError, parse_object_id},
};
use mongodb::bson::doc;
use serde_json::Value;

/// Atividades de um usuário. Sem email, a busca é por `userEmail` nulo.
pub async fn list_for_user(store: &dyn DocumentStore, email: Option<&str>) -> Result<Value, AppError> {
    let activities = store
        .find(collections::ACTIVITIES, doc! { "userEmail": email })
        .await?;
    Ok(documents_to_json(activities))
}

/// Sempre devolve um array (vazio se o id não existir)
pub async fn list_by_id(store: &dyn DocumentStore, id: &str) -> Result<Value, AppError> {
    let object_id = parse_object_id(id, "activity")?;
    let activities = store
        .find(collections::ACTIVITIES, doc! { "_id": object_id })
        .await?;
    Ok(documents_to_json(activities))
}

pub async fn delete_activity(store: &dyn DocumentStore, id: &str) -> Result<DeleteAck, AppError> {
    let object_id = parse_object_id(id, "activity")?;
    store
        .delete_one(collections::ACTIVITIES, doc! { "_id": object_id })
        .await
}

/// Atualiza o progresso e deriva o tipo: 100 = Completed, senão Ongoing.
/// Id malformado é 404 antes de qualquer validação do corpo.
pub async fn update_progress(store: &dyn DocumentStore, id: &str, progress: i32) -> Result<Value, AppError> {
    let object_id = parse_object_id(id, "activity")?;
    if !(0..=100).contains(&progress) {
        return Err(AppError::InvalidRequest(
            "progress must be between 0 and 100".to_string(),
        ));
    }
    let activity_type = ActivityType::from_progress(progress);

    store
        .find_one_and_update(
            collections::ACTIVITIES,
            doc! { "_id": object_id },
            doc! { "$set": { "progress": progress, "type": activity_type.as_str() } },
        )
        .await?
        .map(document_to_json)
        .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))
}
