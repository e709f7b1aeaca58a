use crate::{
    database::{collections, DocumentStore},
    models::{
        challenge::STATUS_ONGOING, Activity, ActivityType, ChallengeQuery, InsertOneAck,
        IsJoinedResponse, JoinChallengeRequest, JoinChallengeResponse,
    },
    utils::{document_to_json, documents_to_json, error::AppError, json_to_document, parse_object_id},
};
use mongodb::bson::{self, doc, DateTime, Document};
use serde_json::Value;

/// GET /challenges - filtros opcionais de categoria, datas e participantes
pub async fn list_challenges(store: &dyn DocumentStore, query: &ChallengeQuery) -> Result<Value, AppError> {
    let filter = query.to_filter()?;
    log::debug!("🔎 Challenge filter: {}", filter);
    let challenges = store.find(collections::CHALLENGES, filter).await?;
    Ok(documents_to_json(challenges))
}

pub async fn list_ongoing(store: &dyn DocumentStore) -> Result<Value, AppError> {
    let challenges = store
        .find(collections::CHALLENGES, doc! { "status": STATUS_ONGOING })
        .await?;
    Ok(documents_to_json(challenges))
}

pub async fn get_challenge(store: &dyn DocumentStore, id: &str) -> Result<Value, AppError> {
    let object_id = parse_object_id(id, "challenge")?;
    store
        .find_one(collections::CHALLENGES, doc! { "_id": object_id })
        .await?
        .map(document_to_json)
        .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))
}

pub async fn create_challenge(store: &dyn DocumentStore, body: Value) -> Result<InsertOneAck, AppError> {
    let challenge = json_to_document(body)?;
    store.insert_one(collections::CHALLENGES, challenge).await
}

/// Incrementa o contador de participantes e grava a atividade do usuário.
///
/// São duas escritas independentes: se o insert da atividade falhar, o
/// contador já foi incrementado.
pub async fn join_challenge(
    store: &dyn DocumentStore,
    id: &str,
    request: JoinChallengeRequest,
) -> Result<JoinChallengeResponse, AppError> {
    let object_id = parse_object_id(id, "challenge")?;

    let challenge = store
        .find_one_and_update(
            collections::CHALLENGES,
            doc! { "_id": object_id },
            doc! { "$inc": { "participants": 1 } },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))?;

    let activity = Activity {
        id: None,
        challenge_id: id.to_string(),
        user_email: request.user_email,
        user_name: request.user_name,
        title: request.title.or_else(|| string_field(&challenge, "title")),
        image: request.image.or_else(|| string_field(&challenge, "image")),
        join_at: DateTime::now(),
        progress: 0,
        activity_type: ActivityType::Ongoing,
    };

    store
        .insert_one(collections::ACTIVITIES, bson::to_document(&activity)?)
        .await
        .map_err(|e| {
            log::error!("❌ Participants incremented for {} but activity insert failed", id);
            e
        })?;

    log::info!("✅ {} joined challenge {}", activity.user_email, id);

    Ok(JoinChallengeResponse {
        success: true,
        joined: true,
    })
}

/// Existe atividade em andamento para (challengeId, email)?
pub async fn is_joined(store: &dyn DocumentStore, id: &str, email: Option<&str>) -> Result<IsJoinedResponse, AppError> {
    let filter = doc! {
        "challengeId": id,
        "userEmail": email,
        "type": ActivityType::Ongoing.as_str(),
    };
    let joined = store.find_one(collections::ACTIVITIES, filter).await?.is_some();
    Ok(IsJoinedResponse { joined })
}

fn string_field(doc: &Document, key: &str) -> Option<String> {
    doc.get_str(key).ok().map(str::to_string)
}
