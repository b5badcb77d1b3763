//! Dotted-path evaluation over JSON documents.
//!
//! Output paths and template value references share this walker. A path is a
//! `.`-separated sequence of field accessors, optionally with an array index
//! (`items[0].name`), evaluated from the document root. The first segment
//! that cannot be resolved aborts evaluation and names itself in the error.

use serde_json::{Map, Value};

use crate::error::{EvaluateError, FieldNotFound};

/// A segment of a dotted path, optionally with an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathSegment {
    pub name: String,
    pub index: Option<usize>,
}

/// Parse a dotted path into segments.
///
/// `"spec.items[0].name"` → `[spec, items[0], name]`
pub(crate) fn parse_path(path: &str) -> Vec<PathSegment> {
    path.split('.')
        .map(|part| {
            if let Some(open) = part.find('[')
                && let Some(close) = part.find(']')
                && let Ok(index) = part[open + 1..close].parse::<usize>()
            {
                return PathSegment {
                    name: part[..open].to_string(),
                    index: Some(index),
                };
            }
            PathSegment {
                name: part.to_string(),
                index: None,
            }
        })
        .collect()
}

/// Evaluate a dotted path against a document's fields.
pub fn evaluate<'a>(root: &'a Map<String, Value>, path: &str) -> Result<&'a Value, EvaluateError> {
    let mut current: Option<&Value> = None;

    for segment in parse_path(path) {
        let field = match current {
            None => root.get(&segment.name),
            Some(value) if segment.name.is_empty() => Some(value),
            Some(value) => value.get(&segment.name),
        };
        let field = match segment.index {
            Some(index) => field.and_then(|value| value.get(index)),
            None => field,
        };
        current = Some(field.ok_or_else(|| FieldNotFound(segment.name.clone()))?);
    }

    current.ok_or_else(|| EvaluateError::from(FieldNotFound(path.to_string())))
}
