//! Error types for template stamping and output extraction.
//!
//! The display strings here are consumed by downstream condition reporting
//! and log scraping, so their exact wording is load-bearing.

use thiserror::Error;

/// Failure to render a raw template into a resource document.
#[derive(Debug, Error)]
pub enum StampError {
    /// The raw template could not be decoded into a JSON document.
    #[error("unmarshal to JSON: {0}")]
    Unmarshal(String),

    /// The decoded template is not a JSON object.
    #[error("template is not a JSON object")]
    NotAnObject,
}

/// A path segment that could not be resolved during evaluation.
#[derive(Debug, Error)]
#[error("find results: {0} is not found")]
pub struct FieldNotFound(pub String);

/// Failure to evaluate a dotted path against a document.
#[derive(Debug, Error)]
#[error("evaluate: {0}")]
pub struct EvaluateError(#[from] pub FieldNotFound);

/// Failure to extract a declared output from a materialized object.
#[derive(Debug, Error)]
#[error("get output: {0}")]
pub struct OutputError(#[from] pub EvaluateError);
