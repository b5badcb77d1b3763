//! Run template model, stamping, and output extraction.
//!
//! A run template pairs a raw resource document (JSON with embedded
//! `{{path}}` value references) with a set of named output paths. The
//! [`Stamper`] renders the document against a pipeline's templating context;
//! [`RunTemplate::output`] evaluates the declared paths against the
//! materialized instance once the store has accepted the stamped object.

pub mod error;
pub mod eval;
pub mod run_template;
pub mod stamper;

pub use error::{EvaluateError, FieldNotFound, OutputError, StampError};
pub use run_template::{Outputs, RunTemplate};
pub use stamper::{PIPELINE_NAME_LABEL, RUN_TEMPLATE_NAME_LABEL, Stamper};
