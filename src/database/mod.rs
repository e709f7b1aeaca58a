#[cfg(test)]
pub mod memory;

use crate::{
    models::{DeleteAck, InsertManyAck, InsertOneAck, UpdateAck},
    utils::{bson_to_json, error::AppError},
};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, ReturnDocument, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database};
use std::time::Duration;

/// Nomes das coleções
pub mod collections {
    pub const USERS: &str = "users";
    pub const STATISTICS: &str = "statistics";
    pub const UPCOMING_EVENTS: &str = "upcomingEvent";
    pub const TIPS: &str = "tips";
    pub const HERO: &str = "hero";
    pub const CHALLENGES: &str = "challenges";
    pub const ACTIVITIES: &str = "myActivities";
}

/// Operações de documento usadas pelos serviços. Cada chamada é uma
/// única ida ao banco; não há transações.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, AppError>;

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, AppError>;

    async fn insert_one(&self, collection: &str, document: Document) -> Result<InsertOneAck, AppError>;

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<InsertManyAck, AppError>;

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateAck, AppError>;

    /// Aplica o update e devolve o documento já atualizado
    async fn find_one_and_update(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<Option<Document>, AppError>;

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<DeleteAck, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // Stable API v1
        client_options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        let mongodb = Self { client, db };
        mongodb.ping().await?;

        log::info!("✅ Pinged your deployment. Connected to database: {}", db_name);

        Ok(mongodb)
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoDB {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, AppError> {
        let cursor = self.collection(collection).find(filter).await?;
        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, AppError> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<InsertOneAck, AppError> {
        let result = self.collection(collection).insert_one(document).await?;
        Ok(InsertOneAck {
            acknowledged: true,
            inserted_id: bson_to_json(result.inserted_id),
        })
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<InsertManyAck, AppError> {
        let result = self.collection(collection).insert_many(documents).await?;
        let inserted_ids = result
            .inserted_ids
            .into_iter()
            .map(|(index, id)| (index.to_string(), bson_to_json(id)))
            .collect::<std::collections::BTreeMap<_, _>>();
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
        let result = self.collection(collection).update_one(filter, update).await?;
        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(result.upserted_id.is_some()),
            upserted_id: result.upserted_id.map(bson_to_json),
        })
    }

    async fn find_one_and_update(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<Option<Document>, AppError> {
        Ok(self
            .collection(collection)
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<DeleteAck, AppError> {
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
