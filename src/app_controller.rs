/*!
 * Application controller.
 *
 * Wires the configuration into a repository and executes the CLI commands,
 * printing record field mappings as JSON on stdout.
 */

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::Config;
use crate::database::DatabaseConnection;
use crate::repository::TranslationRepository;
use crate::store_context::FixedStoreContext;

/// Main application controller for the translation store
pub struct Controller {
    /// Repository backing all record operations
    repository: TranslationRepository,
}

impl Controller {
    /// Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let db = match &config.database_path {
            Some(path) => DatabaseConnection::new(path)?,
            None => DatabaseConnection::new_default()?,
        };

        let store_context = Arc::new(FixedStoreContext::new(config.default_store_id));
        let repository = TranslationRepository::with_connection(db, store_context);

        debug!(
            "Controller initialized with default store {}",
            config.default_store_id
        );

        Ok(Self { repository })
    }

    /// Create a controller with an in-memory database (for testing)
    pub fn new_for_test() -> Result<Self> {
        let store_context = Arc::new(FixedStoreContext::new(0));
        let repository = TranslationRepository::new_in_memory(store_context)?;
        Ok(Self { repository })
    }

    /// The underlying repository
    pub fn repository(&self) -> &TranslationRepository {
        &self.repository
    }

    /// Print a record's field mapping as JSON
    pub async fn get(&self, id: i64) -> Result<()> {
        let json = self.repository.get(id).await?;
        println!("{}", json);
        Ok(())
    }

    /// Create a record from a JSON object and print the saved mapping
    ///
    /// The repository's create contract reports no failure cause; the CLI
    /// surfaces the same opaque failure.
    pub async fn create(&self, data: &str) -> Result<()> {
        match self.repository.create(data).await {
            Some(json) => {
                println!("{}", json);
                Ok(())
            }
            None => Err(anyhow!("Could not create the translation")),
        }
    }

    /// Overlay a JSON object onto an existing record and print the result
    pub async fn update(&self, id: i64, data: &str) -> Result<()> {
        match self.repository.update(id, data).await {
            Some(json) => {
                println!("{}", json);
                Ok(())
            }
            None => Err(anyhow!("Could not update translation {}", id)),
        }
    }

    /// Delete a record by identifier
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        info!("Deleted translation {}", id);
        Ok(())
    }

    /// Print the most recently updated records, one JSON object per line
    pub async fn list(&self, limit: usize) -> Result<()> {
        let records = self.repository.list(limit).await?;
        for record in &records {
            println!("{}", serde_json::to_string(&record.to_field_map())?);
        }
        debug!("Listed {} translations", records.len());
        Ok(())
    }

    /// Print database statistics
    pub async fn stats(&self) -> Result<()> {
        let stats = self
            .repository
            .resource()
            .connection()
            .stats()
            .context("Failed to read database statistics")?;
        println!("{}", stats);
        Ok(())
    }
}
