//! Validation of an assembled document against the OpenRPC 1.x meta-schema.
//!
//! The meta-schema is compiled as draft-07 and every violation is collected
//! before reporting. Method names are not required to be unique.

use anyhow::{Context, anyhow};
use serde_json::Value;
use thiserror::Error;

const META_SCHEMA: &str = include_str!("../../schemas/openrpc.schema.json");

/// One meta-schema violation, located by JSON pointer into the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

/// Every problem found in one document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("document failed validation ({} problems){}", .0.len(), problem_list(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn problem_list(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(|problem| format!("\n  - {problem}"))
        .collect()
}

/// Validate a serialized document. Returns `ValidationErrors` on failure.
pub fn validate(doc: &Value) -> anyhow::Result<()> {
    let schema: Value = serde_json::from_str(META_SCHEMA).context("parse OpenRPC meta-schema")?;
    let validator = jsonschema::draft7::new(&schema)
        .map_err(|err| anyhow!("compile OpenRPC meta-schema: {err}"))?;

    let problems: Vec<ValidationError> = validator
        .iter_errors(doc)
        .map(|err| {
            let path = err.instance_path.to_string();
            ValidationError {
                path: if path.is_empty() { "/".to_string() } else { path },
                message: err.to_string(),
            }
        })
        .collect();

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(problems).into())
    }
}
