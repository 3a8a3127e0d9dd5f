//! Decoding of generated-problem documents.
//!
//! The generative service that produces new problems lives outside this
//! repository; what crosses the boundary is a JSON document following the
//! fixed response schema (required `type`, `title`, `question`, `analysis`,
//! `solutionSteps`, `answer`; conditionally required `movementParams` /
//! `geometryParams`). This module turns such a document into a validated
//! [`ProblemData`] or a readable error, and is what `--import` feeds.

use crate::problem::ProblemData;
use log::{info, warn};
use std::path::Path;

/// Source tag attached to imported problems so the UI can show provenance.
const IMPORTED_SOURCE_TAG: &str = "imported";

/// Decode and validate one generated-problem JSON document.
///
/// The document must not carry an `id` of its own; one is assigned by the
/// caller-supplied `id` so imported problems can never collide with preset
/// catalog ids. Validation failures return `Err` with the offending field
/// named; the caller reports them and keeps the current catalog.
pub fn problem_from_json(id: &str, json: &str) -> Result<ProblemData, String> {
    let mut value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| format!("invalid JSON: {e}"))?;

    let obj = value
        .as_object_mut()
        .ok_or_else(|| "document root must be a JSON object".to_string())?;
    // Generated documents have no stable identity of their own.
    obj.insert("id".to_string(), serde_json::Value::String(id.to_string()));
    if !obj.contains_key("source") {
        obj.insert(
            "source".to_string(),
            serde_json::Value::String(IMPORTED_SOURCE_TAG.to_string()),
        );
    }

    let problem: ProblemData =
        serde_json::from_value(value).map_err(|e| format!("schema mismatch: {e}"))?;
    problem.validate()?;
    Ok(problem)
}

/// Load a generated-problem document from disk.
///
/// Used by the `--import` CLI flag. The file stem becomes part of the
/// assigned id.
pub fn problem_from_file(path: &Path) -> Result<ProblemData, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("problem");
    let id = format!("imported-{stem}");
    match problem_from_json(&id, &json) {
        Ok(problem) => {
            info!("imported problem '{}' from {}", problem.id, path.display());
            Ok(problem)
        }
        Err(e) => {
            warn!("rejected {}: {e}", path.display());
            Err(e)
        }
    }
}
