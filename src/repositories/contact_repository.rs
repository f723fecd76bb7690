// repositories/contact_repository.rs

use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection, Database};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::contact::ContactMessage;

const COLLECTION_NAME: &str = "contact_messages";

/// Store-related error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database operation failed: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A persisted timestamp string could not be parsed back into an instant
    #[error("Malformed stored timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Wire shape of a record in the collection; the timestamp is persisted
/// as an ISO-8601 string and re-parsed on read
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactDocument {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

impl From<&ContactMessage> for ContactDocument {
    fn from(record: &ContactMessage) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            subject: record.subject.clone(),
            message: record.message.clone(),
            timestamp: record.timestamp.to_rfc3339(),
        }
    }
}

impl TryFrom<ContactDocument> for ContactMessage {
    type Error = chrono::ParseError;

    fn try_from(doc: ContactDocument) -> Result<Self, Self::Error> {
        let timestamp = DateTime::parse_from_rfc3339(&doc.timestamp)?.with_timezone(&Utc);
        Ok(Self {
            id: doc.id,
            name: doc.name,
            email: doc.email,
            subject: doc.subject,
            message: doc.message,
            timestamp,
        })
    }
}

/// Accessor for the contact-message collection; records are append-only,
/// no update or delete operation is exposed
#[derive(Clone)]
pub struct ContactStore {
    collection: Collection<ContactDocument>,
}

impl ContactStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    /// Persists one record, completing only once the store acknowledges the write
    pub async fn insert(&self, record: &ContactMessage) -> Result<(), StoreError> {
        self.collection
            .insert_one(ContactDocument::from(record), None)
            .await?;
        Ok(())
    }

    /// Returns up to `limit` records in the store's natural iteration order,
    /// with the store's internal `_id` field projected out
    pub async fn list_all(&self, limit: i64) -> Result<Vec<ContactMessage>, StoreError> {
        let options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .limit(limit)
            .build();

        let mut cursor = self.collection.find(doc! {}, options).await?;
        let mut records = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            records.push(ContactMessage::try_from(document)?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::ContactMessageCreate;

    fn sample_record() -> ContactMessage {
        ContactMessage::new(ContactMessageCreate {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Line1\nLine2".to_string(),
        })
    }

    #[test]
    fn document_conversion_preserves_all_fields() {
        let record = sample_record();

        let document = ContactDocument::from(&record);
        assert_eq!(document.timestamp, record.timestamp.to_rfc3339());

        let back = ContactMessage::try_from(document).unwrap();
        assert_eq!(back.id, record.id);
        assert_eq!(back.name, record.name);
        assert_eq!(back.email, record.email);
        assert_eq!(back.subject, record.subject);
        assert_eq!(back.message, record.message);
        assert_eq!(back.timestamp, record.timestamp);
    }

    #[test]
    fn malformed_stored_timestamp_fails_conversion() {
        let mut document = ContactDocument::from(&sample_record());
        document.timestamp = "yesterday".to_string();

        assert!(ContactMessage::try_from(document).is_err());
    }
}
