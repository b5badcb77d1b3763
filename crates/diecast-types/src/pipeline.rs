//! The pipeline input object and its run template reference.
//!
//! A `Pipeline` names which run template to realize and carries free-form
//! input fields that templates may reference. The realization core reads it
//! and never mutates it; the whole object is serialized into the templating
//! context, so templates can reach any of its fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to a run template by kind, name, and namespace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateRef {
    pub kind: String,
    pub name: String,
    pub namespace: String,
}

/// Object metadata carried by pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// The object driving one realization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pipeline {
    pub metadata: Metadata,
    pub spec: PipelineSpec,
}

/// Pipeline spec: the template reference plus free-form inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineSpec {
    /// Which run template to realize.
    pub run_template_ref: TemplateRef,

    /// Free-form inputs; templates reach these via `{{pipeline.spec.inputs.*}}`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub inputs: BTreeMap<String, Value>,
}
