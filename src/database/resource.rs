/*!
 * Backing resource for translation records.
 *
 * This is the only layer that speaks SQL. It performs load, insert-or-update
 * save, and delete against the translations table, plus the list and count
 * queries the CLI front end needs.
 */

use anyhow::{Context, Result};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Map, Value};

use super::connection::DatabaseConnection;
use super::models::TranslationRecord;

/// Backing resource performing the actual reads and writes
#[derive(Clone)]
pub struct TranslationResource {
    /// Database connection
    db: DatabaseConnection,
}

impl TranslationResource {
    /// Create a new resource with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a resource with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a resource with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Populate the record from the row with the given identifier
    ///
    /// A missing row is not an error: the record is left unpersisted and the
    /// caller decides whether that constitutes a not-found condition.
    pub async fn load(&self, record: &mut TranslationRecord, id: i64) -> Result<()> {
        let loaded = self
            .db
            .execute_async(move |conn| Self::load_sync(conn, id))
            .await?;

        if let Some(loaded) = loaded {
            *record = loaded;
        }
        Ok(())
    }

    /// Load a record by identifier (synchronous version)
    fn load_sync(conn: &Connection, id: i64) -> Result<Option<TranslationRecord>> {
        let row: Option<(i64, Option<i64>, String)> = conn
            .query_row(
                "SELECT id, store_id, fields FROM translations WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((id, store_id, fields_json)) = row else {
            return Ok(None);
        };

        let fields: Map<String, Value> = serde_json::from_str(&fields_json)
            .with_context(|| format!("Corrupt field document for translation {}", id))?;

        Ok(Some(TranslationRecord {
            id,
            store_id,
            fields,
        }))
    }

    /// Persist the record: insert when unpersisted, update otherwise
    ///
    /// On insert the record's identifier is assigned from the database.
    pub async fn save(&self, record: &mut TranslationRecord) -> Result<()> {
        let mut working = record.clone();

        let saved = self
            .db
            .execute_async(move |conn| {
                let fields_json = serde_json::to_string(&working.fields)
                    .context("Failed to serialize record fields")?;
                let now = chrono::Utc::now().to_rfc3339();

                if working.is_persisted() {
                    conn.execute(
                        "UPDATE translations SET store_id = ?1, fields = ?2, updated_at = ?3 WHERE id = ?4",
                        params![working.store_id, fields_json, now, working.id],
                    )?;
                } else {
                    conn.execute(
                        "INSERT INTO translations (store_id, fields, created_at, updated_at)
                         VALUES (?1, ?2, ?3, ?4)",
                        params![working.store_id, fields_json, now, now],
                    )?;
                    working.id = conn.last_insert_rowid();
                }

                Ok(working)
            })
            .await?;

        debug!("Saved translation {}", saved.id);
        *record = saved;
        Ok(())
    }

    /// Remove the record's row from the backing store
    pub async fn delete(&self, record: &TranslationRecord) -> Result<()> {
        let id = record.id;

        self.db
            .execute_async(move |conn| {
                conn.execute("DELETE FROM translations WHERE id = ?1", [id])?;
                Ok(())
            })
            .await?;

        debug!("Deleted translation {}", id);
        Ok(())
    }

    /// List the most recently updated records
    pub async fn list(&self, limit: usize) -> Result<Vec<TranslationRecord>> {
        self.db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, store_id, fields FROM translations
                     ORDER BY updated_at DESC, id DESC
                     LIMIT ?1",
                )?;

                let rows: Vec<(i64, Option<i64>, String)> = stmt
                    .query_map([limit as i64], |row| {
                        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
                    })?
                    .filter_map(|r| r.ok())
                    .collect();

                let mut records = Vec::with_capacity(rows.len());
                for (id, store_id, fields_json) in rows {
                    let fields: Map<String, Value> = serde_json::from_str(&fields_json)
                        .with_context(|| {
                            format!("Corrupt field document for translation {}", id)
                        })?;
                    records.push(TranslationRecord {
                        id,
                        store_id,
                        fields,
                    });
                }
                Ok(records)
            })
            .await
    }

    /// Count all persisted records
    pub async fn count(&self) -> Result<i64> {
        self.db
            .execute_async(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM translations", [], |row| row.get(0))?;
                Ok(count)
            })
            .await
    }

    /// The underlying connection, for stats reporting
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
