//! Merge policy for fragment directories.
//!
//! Methods are concatenated in file order. The three component maps are a
//! shallow union where a later file replaces an earlier file's entry for the
//! same key.

use crate::source::SourceDirs;
use crate::source::dir::{list_fragment_files, read_fragment};
use anyhow::Context;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("fragment {path} must contain a JSON array, found {found}")]
    ExpectedArray { path: PathBuf, found: &'static str },
    #[error("fragment {path} must contain a JSON object, found {found}")]
    ExpectedObject { path: PathBuf, found: &'static str },
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Concatenate the method arrays of every fragment in `dir`.
pub fn load_methods(dir: &Path) -> anyhow::Result<Vec<Value>> {
    let mut methods = Vec::new();
    for path in list_fragment_files(dir)? {
        match read_fragment(&path)? {
            Value::Array(items) => methods.extend(items),
            other => {
                return Err(FragmentError::ExpectedArray {
                    found: kind_of(&other),
                    path,
                }
                .into());
            }
        }
    }
    Ok(methods)
}

/// Union the objects of every fragment in `dir`; later keys win.
pub fn load_map(dir: &Path) -> anyhow::Result<Map<String, Value>> {
    let mut merged = Map::new();
    for path in list_fragment_files(dir)? {
        match read_fragment(&path)? {
            Value::Object(entries) => merged.extend(entries),
            other => {
                return Err(FragmentError::ExpectedObject {
                    found: kind_of(&other),
                    path,
                }
                .into());
            }
        }
    }
    Ok(merged)
}

/// Everything read from the fragment directories for one build.
#[derive(Debug, Clone, Default)]
pub struct Fragments {
    pub methods: Vec<Value>,
    pub schemas: Map<String, Value>,
    pub content: Map<String, Value>,
    pub errors: Map<String, Value>,
}

impl Fragments {
    /// Load methods, schemas, content descriptors, then errors.
    pub fn load(dirs: &SourceDirs) -> anyhow::Result<Self> {
        let methods = load_methods(&dirs.methods).context("load methods")?;
        let schemas = load_map(&dirs.schemas).context("load schemas")?;
        let content = load_map(&dirs.content).context("load content descriptors")?;
        let errors = load_map(&dirs.errors).context("load errors")?;

        Ok(Self {
            methods,
            schemas,
            content,
            errors,
        })
    }
}
