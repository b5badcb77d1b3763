//! Resource store seam consumed by the realizer.
//!
//! The realizer never talks to a store directly; it goes through this trait.
//! Implementations own transport, auth, and caching. Errors are surfaced as
//! `anyhow::Error` so whatever the store reports propagates verbatim into
//! conditions and logs.

use anyhow::Result;
use async_trait::async_trait;

use diecast_templates::RunTemplate;
use diecast_types::{ResourceDocument, TemplateRef};

/// Trait for the managed resource store backing realization.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one repository handle may serve
/// concurrent realizations of distinct pipelines.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Look up a run template by reference.
    async fn get_run_template(&self, reference: &TemplateRef) -> Result<RunTemplate>;

    /// Idempotently persist a stamped object.
    ///
    /// With `allow_update` false the store must only ever create. The
    /// realizer always passes false: it relies on generateName-style
    /// uniqueness plus re-listing instead of updating in place.
    async fn ensure_object_exists_on_cluster(
        &self,
        stamped_object: &ResourceDocument,
        allow_update: bool,
    ) -> Result<()>;

    /// List previously materialized instances matching the exemplar's
    /// identity (apiVersion/kind, namespace, and tracking labels).
    ///
    /// The realizer re-lists after a create rather than trusting a
    /// create-and-return response, because the store may enrich objects
    /// asynchronously.
    async fn list_unstructured(
        &self,
        exemplar: &ResourceDocument,
    ) -> Result<Vec<ResourceDocument>>;
}
