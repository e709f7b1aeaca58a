//! In-memory `DocumentStore` for handler tests.
//!
//! Evaluates only the filter and update operators the services issue:
//! equality, `$in`, `$ne`, `$gt`, `$gte`, `$lt`, `$lte`, `$set` and `$inc`.

use super::DocumentStore;
use crate::{
    models::{DeleteAck, InsertManyAck, InsertOneAck, UpdateAck},
    utils::{bson_to_json, error::AppError},
};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    fail: std::sync::atomic::AtomicBool,
    failing_collections: Mutex<HashSet<String>>,
}

impl MemoryStore {
    /// Makes every subsequent call return a database error.
    pub fn fail_all(&self) {
        self.fail.store(true, std::sync::atomic::Ordering::SeqCst);
    }

    /// Só as chamadas nesta coleção falham; as demais seguem normais.
    pub fn fail_collection(&self, collection: &str) {
        if let Ok(mut failing) = self.failing_collections.lock() {
            failing.insert(collection.to_string());
        }
    }

    pub async fn seed(&self, collection: &str, mut document: Document) -> ObjectId {
        let id = ObjectId::new();
        document.insert("_id", id);
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        id
    }

    pub async fn all(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }

    fn check_collection(&self, collection: &str) -> Result<(), AppError> {
        self.check()?;
        let failing = self
            .failing_collections
            .lock()
            .map(|failing| failing.contains(collection))
            .unwrap_or(false);
        if failing {
            return Err(AppError::DatabaseError(format!("collection {} unavailable", collection)));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, AppError> {
        self.check_collection(collection)?;
        let guard = self.collections.read().await;
        let docs = guard.get(collection).map(Vec::as_slice).unwrap_or(&[]);
        let mut found = Vec::new();
        for doc in docs {
            if matches(doc, &filter)? {
                found.push(doc.clone());
            }
        }
        Ok(found)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, AppError> {
        Ok(self.find(collection, filter).await?.into_iter().next())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> Result<InsertOneAck, AppError> {
        self.check_collection(collection)?;
        let id = ensure_id(&mut document);
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(InsertOneAck {
            acknowledged: true,
            inserted_id: bson_to_json(id),
        })
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<InsertManyAck, AppError> {
        self.check_collection(collection)?;
        if documents.is_empty() {
            return Err(AppError::DatabaseError("documents must be a non-empty list".to_string()));
        }
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        let mut inserted_ids = BTreeMap::new();
        for (index, mut document) in documents.into_iter().enumerate() {
            let id = ensure_id(&mut document);
            inserted_ids.insert(index.to_string(), bson_to_json(id));
            docs.push(document);
        }
        Ok(InsertManyAck {
            acknowledged: true,
            inserted_count: inserted_ids.len(),
            inserted_ids,
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateAck, AppError> {
        self.check_collection(collection)?;
        let mut guard = self.collections.write().await;
        let mut ack = UpdateAck {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 0,
            upserted_id: None,
        };
        if let Some(docs) = guard.get_mut(collection) {
            for doc in docs.iter_mut() {
                if matches(doc, &filter)? {
                    ack.matched_count = 1;
                    if apply_update(doc, &update)? {
                        ack.modified_count = 1;
                    }
                    break;
                }
            }
        }
        Ok(ack)
    }

    async fn find_one_and_update(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<Option<Document>, AppError> {
        self.check_collection(collection)?;
        let mut guard = self.collections.write().await;
        if let Some(docs) = guard.get_mut(collection) {
            for doc in docs.iter_mut() {
                if matches(doc, &filter)? {
                    apply_update(doc, &update)?;
                    return Ok(Some(doc.clone()));
                }
            }
        }
        Ok(None)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<DeleteAck, AppError> {
        self.check_collection(collection)?;
        let mut guard = self.collections.write().await;
        let mut deleted_count = 0;
        if let Some(docs) = guard.get_mut(collection) {
            let mut position = None;
            for (index, doc) in docs.iter().enumerate() {
                if matches(doc, &filter)? {
                    position = Some(index);
                    break;
                }
            }
            if let Some(index) = position {
                docs.remove(index);
                deleted_count = 1;
            }
        }
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

fn ensure_id(document: &mut Document) -> Bson {
    match document.get("_id") {
        Some(id) => id.clone(),
        None => {
            let id = Bson::ObjectId(ObjectId::new());
            document.insert("_id", id.clone());
            id
        }
    }
}

fn unsupported(op: &str) -> AppError {
    AppError::DatabaseError(format!("unsupported operator in memory store: {}", op))
}

fn matches(doc: &Document, filter: &Document) -> Result<bool, AppError> {
    for (field, condition) in filter {
        let value = doc.get(field);
        let ok = match condition {
            Bson::Document(ops) if ops.keys().all(|k| k.starts_with('$')) && !ops.is_empty() => {
                let mut all = true;
                for (op, operand) in ops {
                    all &= eval_operator(value, op, operand)?;
                }
                all
            }
            expected => equals(value, expected),
        };
        if !ok {
            return Ok(false);
        }
    }
    Ok(true)
}

fn eval_operator(value: Option<&Bson>, op: &str, operand: &Bson) -> Result<bool, AppError> {
    let ordered = |accept: fn(Ordering) -> bool| {
        value
            .and_then(|v| compare(v, operand))
            .map(accept)
            .unwrap_or(false)
    };
    Ok(match op {
        "$eq" => equals(value, operand),
        "$ne" => !equals(value, operand),
        "$in" => match operand {
            Bson::Array(candidates) => candidates.iter().any(|c| equals(value, c)),
            _ => return Err(unsupported("$in without array")),
        },
        "$gt" => ordered(|o| o == Ordering::Greater),
        "$gte" => ordered(|o| o != Ordering::Less),
        "$lt" => ordered(|o| o == Ordering::Less),
        "$lte" => ordered(|o| o != Ordering::Greater),
        other => return Err(unsupported(other)),
    })
}

/// Igualdade no estilo MongoDB: null casa com campo ausente,
/// arrays casam se algum elemento for igual.
fn equals(value: Option<&Bson>, expected: &Bson) -> bool {
    match (value, expected) {
        (None, Bson::Null) => true,
        (None, _) => false,
        (Some(Bson::Array(items)), e) if !matches!(e, Bson::Array(_)) => {
            items.iter().any(|item| equals(Some(item), e))
        }
        (Some(v), e) => compare(v, e) == Some(Ordering::Equal) || v == e,
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}

fn compare(a: &Bson, b: &Bson) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (as_number(a), as_number(b)) {
        return x.partial_cmp(&y);
    }
    match (a, b) {
        (Bson::String(x), Bson::String(y)) => Some(x.cmp(y)),
        (Bson::DateTime(x), Bson::DateTime(y)) => Some(x.cmp(y)),
        (Bson::ObjectId(x), Bson::ObjectId(y)) => Some(x.cmp(y)),
        (Bson::Boolean(x), Bson::Boolean(y)) => Some(x.cmp(y)),
        (Bson::Null, Bson::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

/// Returns whether the document changed.
fn apply_update(doc: &mut Document, update: &Document) -> Result<bool, AppError> {
    let before = doc.clone();
    for (op, fields) in update {
        let fields = match fields {
            Bson::Document(fields) => fields,
            _ => return Err(unsupported(op)),
        };
        match op.as_str() {
            "$set" => {
                for (k, v) in fields {
                    doc.insert(k.clone(), v.clone());
                }
            }
            "$inc" => {
                for (k, delta) in fields {
                    let next = match (doc.get(k), delta) {
                        (None, d) => d.clone(),
                        (Some(Bson::Int32(a)), Bson::Int32(b)) => Bson::Int32(a + b),
                        (Some(Bson::Int64(a)), Bson::Int32(b)) => Bson::Int64(a + i64::from(*b)),
                        (Some(Bson::Int64(a)), Bson::Int64(b)) => Bson::Int64(a + b),
                        (Some(Bson::Int32(a)), Bson::Int64(b)) => Bson::Int64(i64::from(*a) + b),
                        (Some(current), d) => match (as_number(current), as_number(d)) {
                            (Some(a), Some(b)) => Bson::Double(a + b),
                            _ => {
                                return Err(AppError::DatabaseError(format!(
                                    "Cannot apply $inc to a non-numeric field: {}",
                                    k
                                )))
                            }
                        },
                    };
                    doc.insert(k.clone(), next);
                }
            }
            other => return Err(unsupported(other)),
        }
    }
    Ok(*doc != before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_in_and_range_filters() {
        let store = MemoryStore::default();
        store.seed("c", doc! { "category": "Energy", "participants": 10_i64 }).await;
        store.seed("c", doc! { "category": "Water", "participants": 30_i32 }).await;
        store.seed("c", doc! { "category": "Waste", "participants": 50.0 }).await;

        let found = store
            .find("c", doc! { "category": { "$in": ["Energy", "Waste"] } })
            .await
            .unwrap();
        assert_eq!(found.len(), 2);

        let found = store
            .find("c", doc! { "participants": { "$gte": 10.0, "$lte": 30.0 } })
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_field_fails_range_but_matches_null() {
        let store = MemoryStore::default();
        store.seed("c", doc! { "title": "no counter" }).await;

        let found = store.find("c", doc! { "participants": { "$gte": 0.0 } }).await.unwrap();
        assert!(found.is_empty());

        let found = store.find("c", doc! { "email": Bson::Null }).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_inc_preserves_integer_type() {
        let store = MemoryStore::default();
        let id = store.seed("c", doc! { "participants": 4_i64 }).await;

        let updated = store
            .find_one_and_update("c", doc! { "_id": id }, doc! { "$inc": { "participants": 1 } })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.get_i64("participants").unwrap(), 5);
    }

    #[tokio::test]
    async fn test_update_reports_unmodified_documents() {
        let store = MemoryStore::default();
        let id = store.seed("u", doc! { "name": "Ana" }).await;

        let ack = store
            .update_one("u", doc! { "_id": id }, doc! { "$set": { "name": "Ana" } })
            .await
            .unwrap();
        assert_eq!(ack.matched_count, 1);
        assert_eq!(ack.modified_count, 0);
    }

    #[tokio::test]
    async fn test_fail_all() {
        let store = MemoryStore::default();
        store.fail_all();
        assert!(store.ping().await.is_err());
        assert!(store.find("c", Document::new()).await.is_err());
    }

    #[tokio::test]
    async fn test_fail_collection_leaves_others_working() {
        let store = MemoryStore::default();
        store.seed("ok", doc! { "n": 1 }).await;
        store.fail_collection("broken");

        assert!(store.insert_one("broken", doc! { "n": 2 }).await.is_err());
        assert!(store.find("broken", Document::new()).await.is_err());
        assert_eq!(store.find("ok", Document::new()).await.unwrap().len(), 1);
        assert!(store.ping().await.is_ok());
    }
}
