/*!
 * End-to-end record lifecycle tests against a file-backed database
 */

use std::sync::Arc;

use serde_json::{json, Map, Value};

use trstore::{
    DatabaseConnection, FixedStoreContext, TranslationError, TranslationRepository,
    TranslationResource,
};

use crate::common::{create_temp_dir, init_test_logging};

fn parse_object(json: &str) -> Map<String, Value> {
    serde_json::from_str(json).expect("Result should be a JSON object")
}

#[tokio::test]
async fn test_fullLifecycle_createGetUpdateDelete_shouldSucceed() {
    init_test_logging();
    let dir = create_temp_dir().expect("Failed to create temp dir");
    let db_path = dir.path().join("translations.db");

    let db = DatabaseConnection::new(&db_path).expect("Failed to open database");
    let repository = TranslationRepository::new(
        TranslationResource::new(db.clone()),
        Arc::new(FixedStoreContext::new(1)),
    );

    // Create
    let created = repository
        .create(r#"{"original": "Goodbye", "translated": "Au revoir"}"#)
        .await
        .expect("Create should succeed");
    let id = parse_object(&created)
        .get("id")
        .and_then(|v| v.as_i64())
        .expect("Created record should carry an id");

    // Get
    let fetched = repository.get(id).await.expect("Get should succeed");
    assert_eq!(
        parse_object(&fetched).get("translated"),
        Some(&json!("Au revoir"))
    );

    // Update
    let updated = repository
        .update(id, r#"{"translated": "Adieu"}"#)
        .await
        .expect("Update should succeed");
    let updated = parse_object(&updated);
    assert_eq!(updated.get("translated"), Some(&json!("Adieu")));
    assert_eq!(updated.get("original"), Some(&json!("Goodbye")));

    // Stats reflect the single record
    let stats = db.stats().expect("Stats should succeed");
    assert_eq!(stats.translation_count, 1);

    // Delete
    assert!(repository.delete_by_id(id).await.expect("Delete failed"));
    assert!(matches!(
        repository.get_by_id(id).await,
        Err(TranslationError::NotFound(_))
    ));
    assert_eq!(db.stats().unwrap().translation_count, 0);
}

#[tokio::test]
async fn test_reopenedDatabase_shouldRetainRecords() {
    let dir = create_temp_dir().expect("Failed to create temp dir");
    let db_path = dir.path().join("translations.db");

    let id = {
        let db = DatabaseConnection::new(&db_path).expect("Failed to open database");
        let repository = TranslationRepository::new(
            TranslationResource::new(db),
            Arc::new(FixedStoreContext::new(1)),
        );

        let created = repository
            .create(r#"{"original": "Persistent"}"#)
            .await
            .expect("Create should succeed");
        parse_object(&created)
            .get("id")
            .and_then(|v| v.as_i64())
            .unwrap()
    };

    // A fresh connection to the same file sees the record
    let db = DatabaseConnection::new(&db_path).expect("Failed to reopen database");
    let repository = TranslationRepository::new(
        TranslationResource::new(db),
        Arc::new(FixedStoreContext::new(1)),
    );

    let record = repository
        .get_by_id(id)
        .await
        .expect("Record should survive reopen");
    assert_eq!(record.field("original"), Some(&json!("Persistent")));
}

#[tokio::test]
async fn test_savedScope_shouldSurviveRoundTrip() {
    let dir = create_temp_dir().expect("Failed to create temp dir");
    let db_path = dir.path().join("translations.db");

    let db = DatabaseConnection::new(&db_path).expect("Failed to open database");
    let repository = TranslationRepository::new(
        TranslationResource::new(db),
        Arc::new(FixedStoreContext::new(9)),
    );

    let saved = repository
        .save(trstore::TranslationRecord::new().with_field("original", "Scoped"))
        .await
        .expect("Save failed");
    assert_eq!(saved.store_id, Some(9));

    let loaded = repository.get_by_id(saved.id).await.unwrap();
    assert_eq!(loaded.store_id, Some(9));

    let map = parse_object(&repository.get(saved.id).await.unwrap());
    assert_eq!(map.get("store_id"), Some(&json!(9)));
}
