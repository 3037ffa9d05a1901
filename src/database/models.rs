/*!
 * Translation record model.
 *
 * The record deliberately keeps its payload as an open-ended field mapping:
 * callers may send and receive arbitrary keys, and only the identifier and
 * the store scope are lifted into typed attributes.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys routed to typed attributes during bulk assignment
const ID_KEY: &str = "id";
const STORE_ID_KEY: &str = "store_id";

/// A translation record with an open-ended field mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Record identifier; 0 means not persisted yet
    pub id: i64,
    /// Store scope; defaulted from the store context at save time when unset
    pub store_id: Option<i64>,
    /// All other fields, never inspected by name
    pub fields: Map<String, Value>,
}

impl TranslationRecord {
    /// Create a new, empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the record has been persisted (identifier assigned)
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Get a field value by key
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Builder-style field assignment, mainly for tests and CLI wiring
    pub fn with_field<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Replace the record's data wholesale with the given mapping
    ///
    /// `id` and `store_id` keys are routed to the typed attributes; they
    /// accept integers or integer-like strings. An unparseable `id` leaves
    /// the record unpersisted, an unparseable `store_id` leaves it unscoped.
    pub fn set_data(&mut self, data: Map<String, Value>) {
        self.id = 0;
        self.store_id = None;
        self.fields = Map::new();
        self.add_data(data);
    }

    /// Overlay the given mapping onto the record's existing data
    pub fn add_data(&mut self, data: Map<String, Value>) {
        for (key, value) in data {
            match key.as_str() {
                ID_KEY => self.id = integer_value(&value).unwrap_or(0),
                STORE_ID_KEY => self.store_id = integer_value(&value),
                _ => {
                    self.fields.insert(key, value);
                }
            }
        }
    }

    /// Project the record into its full field mapping, including the
    /// identifier and the store scope
    pub fn to_field_map(&self) -> Map<String, Value> {
        let mut map = self.fields.clone();
        map.insert(ID_KEY.to_string(), Value::from(self.id));
        map.insert(
            STORE_ID_KEY.to_string(),
            self.store_id.map(Value::from).unwrap_or(Value::Null),
        );
        map
    }
}

/// Interpret a JSON value as an integer, accepting integer-like strings
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
