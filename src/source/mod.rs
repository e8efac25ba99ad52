//! Fragment layer: directory scans and merging of JSON fragment files.
//!
//! Kept apart from the document model. It owns:
//! - the on-disk layout of fragment directories
//! - per-directory merge policy (append for methods, last-write-wins for maps)

pub mod dir;
pub mod merge;

pub use merge::Fragments;

use std::path::{Path, PathBuf};

/// The four fragment directories, in load order.
#[derive(Debug, Clone)]
pub struct SourceDirs {
    pub methods: PathBuf,
    pub schemas: PathBuf,
    pub content: PathBuf,
    pub errors: PathBuf,
}

impl SourceDirs {
    /// Standard layout: `<root>/src/{methods,schemas,content,errors}`.
    pub fn under(root: &Path) -> Self {
        let src = root.join("src");
        Self {
            methods: src.join("methods"),
            schemas: src.join("schemas"),
            content: src.join("content"),
            errors: src.join("errors"),
        }
    }
}
