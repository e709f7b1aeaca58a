use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Confirmações de escrita no formato que os clientes já consomem
/// (mesmas chaves camelCase do driver MongoDB).
#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneAck {
    pub acknowledged: bool,
    #[schema(value_type = String)]
    pub inserted_id: Value,
}

#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertManyAck {
    pub acknowledged: bool,
    pub inserted_count: usize,
    /// Índice no array de entrada -> id gerado
    #[schema(value_type = Object)]
    pub inserted_ids: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    #[schema(value_type = Option<String>)]
    pub upserted_id: Option<Value>,
}

#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}
