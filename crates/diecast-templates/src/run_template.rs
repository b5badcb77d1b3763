//! The run template model and output extraction.
//!
//! A `RunTemplate` is immutable once loaded and owned by the repository; the
//! stamper and extractor borrow it. The raw resource document is only decoded
//! when stamped, so a malformed template surfaces as a stamp failure rather
//! than a load failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use diecast_types::ResourceDocument;

use crate::error::OutputError;
use crate::eval;

/// Extracted outputs: output name → JSON fragment.
pub type Outputs = BTreeMap<String, Value>;

/// A parameterized resource definition plus named output extraction paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunTemplate {
    /// Template name, echoed into stamped-object tracking labels.
    name: String,

    /// Raw JSON document for the target resource, with embedded `{{path}}`
    /// value references.
    template: String,

    /// Output name → dotted extraction path into the materialized object.
    outputs: BTreeMap<String, String>,
}

impl RunTemplate {
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        outputs: BTreeMap<String, String>,
    ) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            outputs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw resource document, undecoded.
    pub fn resource_template(&self) -> &str {
        &self.template
    }

    pub fn outputs(&self) -> &BTreeMap<String, String> {
        &self.outputs
    }

    /// Evaluate every declared output path against a materialized object.
    ///
    /// All-or-nothing: the first unresolvable path fails the whole call, so a
    /// partial output map is never observable. A template with no declared
    /// outputs yields an empty map.
    pub fn output(&self, materialized: &ResourceDocument) -> Result<Outputs, OutputError> {
        let mut outputs = Outputs::new();
        for (name, path) in &self.outputs {
            let value = eval::evaluate(materialized.fields(), path)?;
            outputs.insert(name.clone(), value.clone());
        }
        Ok(outputs)
    }
}
