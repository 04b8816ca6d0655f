//! MongoDB-backed contact store.
//!
//! One [`Client`] is built at startup from the configured connection string
//! and shared for the life of the process; the driver pools connections
//! internally, so the store is safe to share across concurrent requests.
//! A `ping` at construction makes an unreachable backend a startup failure.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::schema::{self, Contact, ContactFields, ContactInput};

use super::errors::{StoreError, StoreResult};
use super::ContactStore;

/// Name of the backing collection.
const COLLECTION: &str = "contacts";

/// Contact store backed by a MongoDB collection.
pub struct MongoStore {
    collection: Collection<ContactDocument>,
}

impl MongoStore {
    /// Connect to the backend and verify it responds.
    ///
    /// Establishes the client once; a connectivity failure here is returned
    /// to the caller, which treats it as fatal to startup. No retry loop.
    pub async fn connect(uri: &str, database: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);

        // The driver connects lazily; ping forces the handshake now.
        db.run_command(doc! { "ping": 1 }).await?;

        Ok(Self {
            collection: db.collection(COLLECTION),
        })
    }
}

#[async_trait]
impl ContactStore for MongoStore {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ContactDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Contact::from).collect())
    }

    async fn find(&self, id: &str) -> StoreResult<Contact> {
        let oid = parse_id(id)?;
        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(document.into())
    }

    async fn insert(&self, input: ContactInput) -> StoreResult<Contact> {
        let fields = schema::validate(&input)?;
        let document = ContactDocument::new(ObjectId::new(), fields);
        self.collection.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn update(&self, id: &str, patch: ContactInput) -> StoreResult<Contact> {
        let oid = parse_id(id)?;
        let existing: Contact = self
            .collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or(StoreError::NotFound)?
            .into();

        let merged = patch.merged_with(&existing);
        let fields = schema::validate(&merged)?;
        let replacement = ContactDocument::new(oid, fields);

        let result = self
            .collection
            .replace_one(doc! { "_id": oid }, &replacement)
            .await?;
        if result.matched_count == 0 {
            // Deleted between the read and the replace.
            return Err(StoreError::NotFound);
        }

        Ok(replacement.into())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let oid = parse_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// A malformed id cannot address any record, so it maps to `NotFound`
/// rather than a distinct bad-request failure.
fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::NotFound)
}

/// On-disk shape of a contact: `_id` as a real ObjectId, everything else as
/// served over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    first_name: String,
    last_name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    favorite_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<NaiveDate>,
}

impl ContactDocument {
    fn new(id: ObjectId, fields: ContactFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            favorite_color: fields.favorite_color,
            birthday: fields.birthday,
        }
    }
}

impl From<ContactDocument> for Contact {
    fn from(document: ContactDocument) -> Self {
        Contact {
            id: document.id.to_hex(),
            first_name: document.first_name,
            last_name: document.last_name,
            email: document.email,
            favorite_color: document.favorite_color,
            birthday: document.birthday,
        }
    }
}
