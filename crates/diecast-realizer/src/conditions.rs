//! Condition constructors for realization outcomes.
//!
//! Every realization reports exactly one condition of type
//! `RunTemplateReady`. The reason strings pinned here map 1:1 onto the
//! realizer's failure steps and are consumed by downstream status checks.

use diecast_types::{Condition, ConditionStatus};

/// Condition type reported for every realization.
pub const RUN_TEMPLATE_READY: &str = "RunTemplateReady";

pub const REASON_READY: &str = "Ready";
pub const REASON_RUN_TEMPLATE_NOT_FOUND: &str = "RunTemplateNotFound";
pub const REASON_TEMPLATE_STAMP_FAILURE: &str = "TemplateStampFailure";
pub const REASON_STAMPED_OBJECT_REJECTED: &str = "StampedObjectRejectedByAPIServer";
pub const REASON_FAILED_TO_LIST_CREATED_OBJECTS: &str = "FailedToListCreatedObjects";
pub const REASON_OUTPUT_PATH_NOT_SATISFIED: &str = "OutputPathNotSatisfied";

/// Every step succeeded.
pub fn run_template_ready() -> Condition {
    Condition::new(RUN_TEMPLATE_READY, ConditionStatus::True, REASON_READY, "")
}

/// The referenced run template could not be fetched.
pub fn run_template_missing(message: impl Into<String>) -> Condition {
    Condition::new(
        RUN_TEMPLATE_READY,
        ConditionStatus::False,
        REASON_RUN_TEMPLATE_NOT_FOUND,
        message,
    )
}

/// The template document could not be decoded or rendered.
pub fn template_stamp_failure(message: impl Into<String>) -> Condition {
    Condition::new(
        RUN_TEMPLATE_READY,
        ConditionStatus::False,
        REASON_TEMPLATE_STAMP_FAILURE,
        message,
    )
}

/// The store rejected persistence of the stamped object.
pub fn stamped_object_rejected(message: impl Into<String>) -> Condition {
    Condition::new(
        RUN_TEMPLATE_READY,
        ConditionStatus::False,
        REASON_STAMPED_OBJECT_REJECTED,
        message,
    )
}

/// The store could not be queried for the materialized instance.
pub fn failed_to_list_created_objects(message: impl Into<String>) -> Condition {
    Condition::new(
        RUN_TEMPLATE_READY,
        ConditionStatus::False,
        REASON_FAILED_TO_LIST_CREATED_OBJECTS,
        message,
    )
}

/// The materialized object lacks data at one or more declared output paths.
pub fn output_path_not_satisfied(message: impl Into<String>) -> Condition {
    Condition::new(
        RUN_TEMPLATE_READY,
        ConditionStatus::False,
        REASON_OUTPUT_PATH_NOT_SATISFIED,
        message,
    )
}
