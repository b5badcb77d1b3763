//! The realization orchestrator.
//!
//! `Realizer::realize` sequences template lookup, stamping, idempotent
//! creation, re-listing, and output extraction. Each step has exactly one
//! failure reason and each failure is terminal for the call: nothing retries
//! here, and nothing panics — the surrounding reconcile loop owns scheduling
//! and backoff.

use std::collections::BTreeMap;
use std::future::Future;

use anyhow::{Result, anyhow};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use diecast_templates::{
    Outputs, PIPELINE_NAME_LABEL, RUN_TEMPLATE_NAME_LABEL, Stamper,
};
use diecast_types::{Condition, Pipeline, ResourceDocument};

use crate::conditions;
use crate::logger::Logger;
use crate::repository::Repository;

/// Realizes pipelines against a repository.
///
/// Stateless: holds nothing between calls, so one instance may serve any
/// number of pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Realizer;

impl Realizer {
    pub fn new() -> Self {
        Self
    }

    /// Realize one pipeline: resolve its run template, stamp it, ensure the
    /// stamped object exists on the cluster, and extract the declared
    /// outputs from the materialized instance.
    ///
    /// Returns the outcome condition, the extracted outputs (`Some` exactly
    /// when the condition is True), and the materialized object (`Some`
    /// whenever persistence and listing succeeded — callers need it for the
    /// next reconcile attempt even when outputs are not yet satisfied).
    pub async fn realize(
        &self,
        cancellation: &CancellationToken,
        pipeline: &Pipeline,
        logger: &dyn Logger,
        repository: &dyn Repository,
    ) -> (Condition, Option<Outputs>, Option<ResourceDocument>) {
        let reference = &pipeline.spec.run_template_ref;
        let template = match guarded(cancellation, repository.get_run_template(reference)).await {
            Ok(template) => template,
            Err(err) => {
                let message = format!("could not get RunTemplate '{}'", reference.name);
                logger.error(&err, &message);
                return (
                    conditions::run_template_missing(format!("{message}: {err}")),
                    None,
                    None,
                );
            }
        };

        let labels = BTreeMap::from([
            (
                PIPELINE_NAME_LABEL.to_string(),
                pipeline.metadata.name.clone(),
            ),
            (
                RUN_TEMPLATE_NAME_LABEL.to_string(),
                template.name().to_string(),
            ),
        ]);
        let stamper = Stamper::for_pipeline(pipeline, labels);
        let stamped_object = match stamper.stamp(template.resource_template()) {
            Ok(stamped_object) => stamped_object,
            Err(err) => {
                logger.error(&err, "could not stamp template");
                return (
                    conditions::template_stamp_failure(format!("could not stamp template: {err}")),
                    None,
                    None,
                );
            }
        };

        if let Err(err) = guarded(
            cancellation,
            repository.ensure_object_exists_on_cluster(&stamped_object, false),
        )
        .await
        {
            logger.error(&err, "could not create object");
            return (
                conditions::stamped_object_rejected(format!("could not create object: {err}")),
                None,
                None,
            );
        }

        let listed = match guarded(cancellation, repository.list_unstructured(&stamped_object)).await
        {
            Ok(listed) => listed,
            Err(err) => {
                let message = format!("could not list pipeline objects: {err}");
                logger.error(&err, &message);
                return (
                    conditions::failed_to_list_created_objects(message),
                    None,
                    None,
                );
            }
        };

        let Some(materialized) = select_materialized(&stamped_object, listed) else {
            let err = anyhow!("no object found matching the stamped object's identity");
            let message = format!("could not list pipeline objects: {err}");
            logger.error(&err, &message);
            return (
                conditions::failed_to_list_created_objects(message),
                None,
                None,
            );
        };

        let outputs = match template.output(&materialized) {
            Ok(outputs) => outputs,
            Err(err) => {
                logger.info(&format!("could not get output: {err}"));
                return (
                    conditions::output_path_not_satisfied(err.to_string()),
                    None,
                    Some(materialized),
                );
            }
        };

        debug!(pipeline = %pipeline.metadata.name, "realized pipeline");
        (
            conditions::run_template_ready(),
            Some(outputs),
            Some(materialized),
        )
    }
}

/// Run a repository call unless the caller already cancelled.
///
/// A cancelled token fails the step with the same error shape any store
/// failure would have, so cancellation flows through the normal condition
/// mapping instead of introducing a new outcome.
async fn guarded<T, F>(cancellation: &CancellationToken, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if cancellation.is_cancelled() {
        return Err(anyhow!("operation cancelled"));
    }
    call.await
}

/// Pick the authoritative instance from a listing.
///
/// Prefers the entry whose identity matches the stamped object; falls back
/// to a sole listed entry so stores that rename beyond the generateName
/// prefix still resolve.
fn select_materialized(
    stamped: &ResourceDocument,
    listed: Vec<ResourceDocument>,
) -> Option<ResourceDocument> {
    let sole_entry = listed.len() == 1;
    let mut fallback = None;

    for candidate in listed {
        if matches_identity(stamped, &candidate) {
            return Some(candidate);
        }
        if sole_entry {
            fallback = Some(candidate);
        }
    }
    fallback
}

/// Identity match: same apiVersion/kind/namespace, and the candidate carries
/// the stamped name — directly, or via the stamped generateName prefix when
/// the store assigned the final name.
fn matches_identity(stamped: &ResourceDocument, candidate: &ResourceDocument) -> bool {
    if stamped.api_version() != candidate.api_version()
        || stamped.kind() != candidate.kind()
        || stamped.namespace() != candidate.namespace()
    {
        return false;
    }

    match (stamped.name(), stamped.generate_name()) {
        (Some(name), _) => candidate.name() == Some(name),
        (None, Some(prefix)) => match candidate.name() {
            Some(name) => name.starts_with(prefix),
            None => candidate.generate_name() == Some(prefix),
        },
        (None, None) => false,
    }
}
