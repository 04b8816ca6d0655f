//! In-memory contact store.
//!
//! Keeps records in insertion order behind a `RwLock` and mirrors the
//! observable semantics of the MongoDB store, including ObjectId-shaped ids
//! and malformed-id handling. Used by the HTTP test suite and as a
//! zero-dependency dev backend.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::schema::{self, Contact, ContactInput};

use super::errors::{StoreError, StoreResult};
use super::ContactStore;

/// Contact store holding records in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Contact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.clone())
    }

    async fn find(&self, id: &str) -> StoreResult<Contact> {
        let records = self.records.read().map_err(poisoned)?;
        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, input: ContactInput) -> StoreResult<Contact> {
        let fields = schema::validate(&input)?;
        let contact = Contact::from_fields(ObjectId::new().to_hex(), fields);

        let mut records = self.records.write().map_err(poisoned)?;
        records.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &str, patch: ContactInput) -> StoreResult<Contact> {
        let mut records = self.records.write().map_err(poisoned)?;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound)?;

        let merged = patch.merged_with(record);
        let fields = schema::validate(&merged)?;
        *record = Contact::from_fields(record.id.clone(), fields);
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound)?;
        records.remove(index);
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}
