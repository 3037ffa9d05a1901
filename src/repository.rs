/*!
 * Translation record repository.
 *
 * The repository is the gateway callers go through for every record
 * operation. It defaults the store scope on save, delegates the actual reads
 * and writes to the backing resource, and translates failures into the typed
 * errors of the repository contract.
 *
 * Two calling conventions coexist deliberately:
 * - `save`/`get_by_id`/`get`/`delete`/`delete_by_id` surface typed
 *   `TranslationError` values;
 * - `create`/`update` collapse every failure into `None`, preserving the
 *   fail-silent contract of the original API surface.
 */

use std::sync::Arc;

use anyhow::Result;
use log::debug;
use serde_json::{Map, Value};

use crate::database::{DatabaseConnection, TranslationRecord, TranslationResource};
use crate::errors::TranslationError;
use crate::store_context::StoreContext;

/// Gateway for translation record operations
#[derive(Clone)]
pub struct TranslationRepository {
    /// Backing resource performing the actual reads and writes
    resource: TranslationResource,
    /// Provider of the caller's active store scope
    store_context: Arc<dyn StoreContext>,
}

impl TranslationRepository {
    /// Create a repository over the given resource and store context
    pub fn new(resource: TranslationResource, store_context: Arc<dyn StoreContext>) -> Self {
        Self {
            resource,
            store_context,
        }
    }

    /// Create a repository over the given database connection
    pub fn with_connection(db: DatabaseConnection, store_context: Arc<dyn StoreContext>) -> Self {
        Self::new(TranslationResource::new(db), store_context)
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory(store_context: Arc<dyn StoreContext>) -> Result<Self> {
        Ok(Self::new(
            TranslationResource::new_in_memory()?,
            store_context,
        ))
    }

    /// Persist the record, defaulting its store scope from the context
    ///
    /// Records saved without a store scope are scoped to the caller's
    /// current store; an already-set scope is never overwritten.
    pub async fn save(
        &self,
        mut record: TranslationRecord,
    ) -> Result<TranslationRecord, TranslationError> {
        if record.store_id.is_none() {
            record.store_id = Some(self.store_context.current_store_id());
        }

        self.resource
            .save(&mut record)
            .await
            .map_err(|e| TranslationError::SaveFailed(e.to_string()))?;

        Ok(record)
    }

    /// Load a record by identifier
    ///
    /// The backing store reports a missing row as an empty record, so
    /// existence is checked on the identifier after the load attempt.
    pub async fn get_by_id(&self, id: i64) -> Result<TranslationRecord, TranslationError> {
        let mut record = TranslationRecord::new();
        self.resource.load(&mut record, id).await?;

        if !record.is_persisted() {
            return Err(TranslationError::NotFound(id));
        }
        Ok(record)
    }

    /// Load a record by identifier and serialize its field mapping to JSON
    pub async fn get(&self, id: i64) -> Result<String, TranslationError> {
        let record = self.get_by_id(id).await?;
        Ok(serde_json::to_string(&record.to_field_map())?)
    }

    /// Remove the record from the backing store
    pub async fn delete(&self, record: &TranslationRecord) -> Result<bool, TranslationError> {
        self.resource
            .delete(record)
            .await
            .map_err(|e| TranslationError::DeleteFailed(e.to_string()))?;

        Ok(true)
    }

    /// Remove a record by identifier
    ///
    /// Load and delete are two separate steps with no transaction linking
    /// them; a record removed concurrently in between surfaces as whatever
    /// the backing store does.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, TranslationError> {
        let record = self.get_by_id(id).await?;
        self.delete(&record).await
    }

    /// Create a record from a JSON object of field values
    ///
    /// Returns the saved record's field mapping as JSON, or `None` on any
    /// failure — malformed input and storage failures are indistinguishable
    /// to the caller. The store scope is NOT defaulted here; only `save`
    /// applies the context scope.
    pub async fn create(&self, data: &str) -> Option<String> {
        match self.try_create(data).await {
            Ok(json) => Some(json),
            Err(e) => {
                debug!("Create failed: {}", e);
                None
            }
        }
    }

    async fn try_create(&self, data: &str) -> Result<String> {
        let fields: Map<String, Value> = serde_json::from_str(data)?;

        let mut record = TranslationRecord::new();
        record.set_data(fields);
        self.resource.save(&mut record).await?;

        Ok(serde_json::to_string(&record.to_field_map())?)
    }

    /// Overlay a JSON object of field values onto an existing record
    ///
    /// Returns the updated field mapping as JSON, or `None` when the record
    /// does not exist or on any other failure.
    pub async fn update(&self, id: i64, data: &str) -> Option<String> {
        match self.try_update(id, data).await {
            Ok(json) => json,
            Err(e) => {
                debug!("Update of translation {} failed: {}", id, e);
                None
            }
        }
    }

    async fn try_update(&self, id: i64, data: &str) -> Result<Option<String>> {
        let mut record = TranslationRecord::new();
        self.resource.load(&mut record, id).await?;

        if !record.is_persisted() {
            return Ok(None);
        }

        let fields: Map<String, Value> = serde_json::from_str(data)?;
        record.add_data(fields);
        self.resource.save(&mut record).await?;

        Ok(Some(serde_json::to_string(&record.to_field_map())?))
    }

    /// List the most recently updated records
    pub async fn list(&self, limit: usize) -> Result<Vec<TranslationRecord>, TranslationError> {
        Ok(self.resource.list(limit).await?)
    }

    /// The backing resource, for stats reporting
    pub fn resource(&self) -> &TranslationResource {
        &self.resource
    }
}
