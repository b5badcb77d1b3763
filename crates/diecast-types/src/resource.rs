//! Unstructured resource documents.
//!
//! Stamped and materialized objects are arbitrary JSON documents with the
//! conventional `apiVersion`/`kind`/`metadata` envelope. `ResourceDocument`
//! wraps one and gives typed access to the envelope without constraining the
//! rest of the document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An arbitrary resource document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceDocument {
    fields: Map<String, Value>,
}

impl ResourceDocument {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a JSON value; returns `None` unless the value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// The document as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// A top-level field of the document.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn api_version(&self) -> Option<&str> {
        self.fields.get("apiVersion").and_then(Value::as_str)
    }

    pub fn kind(&self) -> Option<&str> {
        self.fields.get("kind").and_then(Value::as_str)
    }

    fn metadata(&self) -> Option<&Map<String, Value>> {
        self.fields.get("metadata").and_then(Value::as_object)
    }

    fn metadata_str(&self, field: &str) -> Option<&str> {
        self.metadata()?.get(field).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata_str("name")
    }

    /// The server-side name prefix used when the store assigns final names.
    pub fn generate_name(&self) -> Option<&str> {
        self.metadata_str("generateName")
    }

    pub fn namespace(&self) -> Option<&str> {
        self.metadata_str("namespace")
    }

    pub fn labels(&self) -> Option<&Map<String, Value>> {
        self.metadata()?.get("labels").and_then(Value::as_object)
    }

    /// Set a label, creating `metadata.labels` as needed.
    pub fn set_label(&mut self, key: &str, value: &str) {
        let metadata = self
            .fields
            .entry("metadata")
            .or_insert_with(|| Value::Object(Map::new()));
        if !metadata.is_object() {
            *metadata = Value::Object(Map::new());
        }
        if let Some(metadata) = metadata.as_object_mut() {
            let labels = metadata
                .entry("labels")
                .or_insert_with(|| Value::Object(Map::new()));
            if !labels.is_object() {
                *labels = Value::Object(Map::new());
            }
            if let Some(labels) = labels.as_object_mut() {
                labels.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
    }
}
