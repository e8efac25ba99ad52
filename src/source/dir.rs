use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// List the `.json` files of a fragment directory, sorted by file name.
///
/// Subdirectories and other files are skipped. A missing directory is an error.
pub fn list_fragment_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read fragment dir {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list fragment dir {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("stat {}", path.display()))?;

        if !file_type.is_file() || path.extension().is_none_or(|ext| ext != "json") {
            debug!(path = %path.display(), "skipping non-fragment entry");
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read and parse one fragment file.
pub fn read_fragment(path: &Path) -> anyhow::Result<Value> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!(file = %name, "loading fragment");

    let text =
        fs::read_to_string(path).with_context(|| format!("read fragment {}", path.display()))?;
    let value = serde_json::from_str(&text)
        .with_context(|| format!("parse fragment {}", path.display()))?;
    Ok(value)
}
