//! Stamping: rendering a run template into a concrete resource document.
//!
//! The stamper decodes a raw template document and resolves every embedded
//! `{{path}}` value reference against the templating context built from the
//! input pipeline. A string that is exactly one reference takes the
//! referenced value with its JSON type preserved; text with embedded
//! references gets each resolved value stringified in place. References to
//! absent fields resolve to null rather than failing, so templates may name
//! fields the pipeline does not carry.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use diecast_types::{Pipeline, ResourceDocument};

use crate::error::StampError;
use crate::eval;

/// Label carrying the owning pipeline's name on stamped objects.
pub const PIPELINE_NAME_LABEL: &str = "diecast.dev/pipeline-name";

/// Label carrying the originating run template's name on stamped objects.
pub const RUN_TEMPLATE_NAME_LABEL: &str = "diecast.dev/run-template-name";

/// Renders raw templates against one pipeline's templating context.
pub struct Stamper {
    context: Map<String, Value>,
    labels: BTreeMap<String, String>,
}

impl Stamper {
    /// Build a stamper whose context exposes the pipeline under `pipeline.*`,
    /// merging `labels` into every stamped document's metadata.
    pub fn for_pipeline(pipeline: &Pipeline, labels: BTreeMap<String, String>) -> Self {
        let mut context = Map::new();
        context.insert(
            "pipeline".to_string(),
            serde_json::to_value(pipeline).unwrap_or_default(),
        );
        Self { context, labels }
    }

    /// Render a raw template document into a stamped resource document.
    ///
    /// Stamping the same (template, pipeline) pair twice produces
    /// structurally identical documents; nothing here touches a store.
    pub fn stamp(&self, raw: &str) -> Result<ResourceDocument, StampError> {
        let decoded = decode(raw)?;
        let resolved = self.resolve_value(&decoded);

        let mut document =
            ResourceDocument::from_value(resolved).ok_or(StampError::NotAnObject)?;
        for (key, value) in &self.labels {
            document.set_label(key, value);
        }

        debug!(
            kind = document.kind().unwrap_or_default(),
            "stamped resource document"
        );
        Ok(document)
    }

    /// Resolve all `{{...}}` references in a JSON value tree.
    fn resolve_value(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => self.resolve_string(s),
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), self.resolve_value(value)))
                    .collect(),
            ),
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.resolve_value(item)).collect())
            }
            other => other.clone(),
        }
    }

    /// Resolve all `{{...}}` references in a string.
    ///
    /// A string that is exactly one reference preserves the resolved value's
    /// JSON type; mixed text and references stringify each resolved value.
    fn resolve_string(&self, s: &str) -> Value {
        let references = find_references(s);
        if references.is_empty() {
            return Value::String(s.to_string());
        }

        if references.len() == 1 && references[0].occurrence == s {
            return self.resolve_reference(&references[0].path);
        }

        let mut result = s.to_string();
        for reference in &references {
            let resolved = self.resolve_reference(&reference.path);
            result = result.replace(&reference.occurrence, &stringify(&resolved));
        }
        Value::String(result)
    }

    /// Look up one reference path in the templating context; absent → null.
    fn resolve_reference(&self, path: &str) -> Value {
        eval::evaluate(&self.context, path)
            .map(Value::clone)
            .unwrap_or(Value::Null)
    }
}

/// Decode a raw template into a JSON value.
fn decode(raw: &str) -> Result<Value, StampError> {
    serde_json::from_str(raw).map_err(|err| {
        if err.is_eof() {
            StampError::Unmarshal("unexpected end of JSON input".to_string())
        } else {
            StampError::Unmarshal(err.to_string())
        }
    })
}

/// A `{{path}}` occurrence found in a template string.
#[derive(Debug)]
struct ValueReference {
    /// The full occurrence including braces.
    occurrence: String,
    /// The inner path, trimmed.
    path: String,
}

/// Find all `{{...}}` references in a string. An unclosed `{{` ends the scan.
fn find_references(s: &str) -> Vec<ValueReference> {
    let mut references = Vec::new();
    let mut remaining = s;

    while let Some(start) = remaining.find("{{") {
        let Some(len) = remaining[start..].find("}}") else {
            break;
        };
        let end = start + len + 2;
        let path = remaining[start + 2..start + len].trim();
        if !path.is_empty() {
            references.push(ValueReference {
                occurrence: remaining[start..end].to_string(),
                path: path.to_string(),
            });
        }
        remaining = &remaining[end..];
    }

    references
}

/// Stringify a resolved value for interpolation into surrounding text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| "null".to_string()),
    }
}
