//! Shared types for the Diecast realization engine.

pub mod condition;
pub mod pipeline;
pub mod resource;

pub use condition::{Condition, ConditionStatus};
pub use pipeline::{Metadata, Pipeline, PipelineSpec, TemplateRef};
pub use resource::ResourceDocument;
