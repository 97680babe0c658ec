//! MongoDB implementation of [`BookingRepository`].
//!
//! Documents are serialized through `serde_json::Value` as an
//! intermediate format, then converted to BSON. This keeps the stored
//! shape identical to the wire shape (UUIDs and timestamps as strings),
//! with the `id` field mapped to MongoDB's `_id` convention.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Collection, Database};
use uuid::Uuid;

use crate::domain::entities::Booking;
use crate::domain::repositories::BookingRepository;
use crate::error::StoreError;

const COLLECTION_NAME: &str = "bookings";

/// Booking store backed by a MongoDB collection.
pub struct MongoBookingRepository {
    collection: Collection<Document>,
}

impl MongoBookingRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    /// Converts a booking into a BSON document, renaming `id` to `_id`.
    fn to_document(booking: &Booking) -> Result<Document, StoreError> {
        let json = serde_json::to_value(booking)
            .map_err(|e| StoreError::Codec(e.to_string()))?;
        let bson = mongodb::bson::to_bson(&json).map_err(|e| StoreError::Codec(e.to_string()))?;

        let Bson::Document(mut document) = bson else {
            return Err(StoreError::Codec("expected a BSON document".to_string()));
        };

        if let Some(id) = document.remove("id") {
            document.insert("_id", id);
        }

        Ok(document)
    }

    /// Converts a stored document back into a booking, renaming `_id` to `id`.
    fn from_document(mut document: Document) -> Result<Booking, StoreError> {
        if let Some(id) = document.remove("_id") {
            document.insert("id", id);
        }

        let json = Bson::Document(document).into_relaxed_extjson();
        serde_json::from_value(json).map_err(|e| StoreError::Codec(e.to_string()))
    }

    fn id_filter(id: &Uuid) -> Document {
        doc! { "_id": id.to_string() }
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn insert(&self, booking: Booking) -> Result<Booking, StoreError> {
        let document = Self::to_document(&booking)?;
        self.collection.insert_one(document).await?;
        Ok(booking)
    }

    async fn find_all(&self) -> Result<Vec<Booking>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents.into_iter().map(Self::from_document).collect()
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Booking>, StoreError> {
        let document = self.collection.find_one(Self::id_filter(id)).await?;
        document.map(Self::from_document).transpose()
    }

    async fn replace(&self, id: &Uuid, booking: Booking) -> Result<Option<Booking>, StoreError> {
        let document = Self::to_document(&booking)?;
        let result = self
            .collection
            .replace_one(Self::id_filter(id), document)
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        Ok(Some(booking))
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<Booking>, StoreError> {
        let document = self
            .collection
            .find_one_and_delete(Self::id_filter(id))
            .await?;

        document.map(Self::from_document).transpose()
    }
}
