// Conversões BSON <-> JSON para as respostas da API
use crate::utils::error::AppError;
use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde_json::Value;

/// Renderiza um valor BSON como JSON "limpo": ObjectId vira string hex,
/// datas viram RFC 3339. O restante segue o extended JSON relaxado.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(doc: Document) -> Value {
    Value::Object(doc.into_iter().map(|(k, v)| (k, bson_to_json(v))).collect())
}

pub fn documents_to_json(docs: Vec<Document>) -> Value {
    Value::Array(docs.into_iter().map(document_to_json).collect())
}

/// Converte um corpo JSON em documento. Só objetos são aceitos.
pub fn json_to_document(value: Value) -> Result<Document, AppError> {
    match value {
        Value::Object(_) => Ok(bson::to_document(&value)?),
        _ => Err(AppError::InvalidRequest("Expected a JSON object".to_string())),
    }
}

/// Faz o parse de um id de rota. Ids malformados são tratados como inexistentes.
pub fn parse_object_id(id: &str, what: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound(format!("Invalid {} id", what)))
}
