//! Defensive normalization of raw model replies.
//!
//! Models wrap JSON in prose and code fences no matter how firmly the prompt
//! forbids it. The fence stripping and first-`{`-to-last-`}` extraction here
//! are the compatibility layer; parsing is the only validation.

use crate::error::FormatError;
use serde_json::Value;

/// Coerce a raw model reply into parsed JSON.
///
/// Steps, in order: strip a leading ```` ```json ```` or ```` ``` ```` fence
/// and a trailing fence, trim, narrow to the first-`{`-to-last-`}` substring
/// if one exists, then parse. The extraction is intentionally greedy and
/// permissive.
pub fn normalize(raw: &str) -> Result<Value, FormatError> {
    let mut working = raw.trim();

    if let Some(rest) = working.strip_prefix("```json") {
        working = rest;
    } else if let Some(rest) = working.strip_prefix("```") {
        working = rest;
    }
    working = working.trim();
    if let Some(rest) = working.strip_suffix("```") {
        working = rest.trim_end();
    }

    if let (Some(start), Some(end)) = (working.find('{'), working.rfind('}')) {
        if start < end {
            working = &working[start..=end];
        }
    }

    serde_json::from_str(working).map_err(|_| FormatError {
        raw: working.to_string(),
    })
}
