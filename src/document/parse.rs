//! Validate and normalize an assembled document.

use crate::document::OpenRpcDocument;
use crate::document::deref::dereference;
use crate::document::validate::validate;
use anyhow::Context;

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Inline local `$ref` pointers instead of preserving them.
    pub dereference: bool,
}

/// Validate `doc` and return its normalized form.
///
/// References are kept as written unless `options.dereference` is set.
pub fn parse_document(
    doc: &OpenRpcDocument,
    options: ParseOptions,
) -> anyhow::Result<OpenRpcDocument> {
    let mut value = serde_json::to_value(doc).context("serialize assembled document")?;
    validate(&value)?;

    if options.dereference {
        value = dereference(&value).context("dereference document")?;
    }

    let parsed = serde_json::from_value(value).context("normalize document")?;
    Ok(parsed)
}
