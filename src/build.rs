//! Build pipeline: load fragments, assemble, validate, write.

use crate::Result;
use crate::document::{self, ParseOptions, parse_document};
use crate::render;
use crate::source::{Fragments, SourceDirs};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root containing `src/{methods,schemas,content,errors}`.
    pub root: PathBuf,
    /// Output file, overwritten on success.
    pub out: PathBuf,
    pub dereference: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub methods: usize,
    pub schemas: usize,
    pub content_descriptors: usize,
    pub errors: usize,
}

/// Assemble and validate; returns the rendered document.
fn assemble_and_render(config: &BuildConfig) -> Result<(String, BuildSummary)> {
    let dirs = SourceDirs::under(&config.root);
    let fragments = Fragments::load(&dirs)?;

    let doc = document::assemble(fragments);
    let parsed = parse_document(
        &doc,
        ParseOptions {
            dereference: config.dereference,
        },
    )?;

    let summary = BuildSummary {
        methods: parsed.methods.len(),
        schemas: parsed.components.schemas.len(),
        content_descriptors: parsed.components.content_descriptors.len(),
        errors: parsed.components.errors.len(),
    };
    let text = render::render_document(&parsed)?;
    Ok((text, summary))
}

/// Full build. The output file is only touched once everything validated.
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary> {
    let (text, summary) = assemble_and_render(config)?;
    render::write_output(&config.out, &text)?;

    info!(
        out = %config.out.display(),
        methods = summary.methods,
        schemas = summary.schemas,
        content_descriptors = summary.content_descriptors,
        errors = summary.errors,
        "wrote document"
    );
    Ok(summary)
}

/// Same pipeline as `run_build` without writing anything.
pub fn run_check(config: &BuildConfig) -> Result<BuildSummary> {
    let (_, summary) = assemble_and_render(config)?;
    info!(
        methods = summary.methods,
        schemas = summary.schemas,
        content_descriptors = summary.content_descriptors,
        errors = summary.errors,
        "document is valid"
    );
    Ok(summary)
}
