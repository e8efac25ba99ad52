use crate::document::OpenRpcDocument;
use anyhow::Context;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Render the document as pretty JSON, one tab per indent level.
pub fn render_document(doc: &OpenRpcDocument) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser).context("serialize document")?;
    let text = String::from_utf8(buf).context("document is not valid UTF-8")?;
    Ok(text)
}

/// Write rendered output, replacing any existing file.
pub fn write_output(path: &Path, text: &str) -> anyhow::Result<()> {
    fs::write(path, text).with_context(|| format!("write output {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::assemble;
    use crate::source::Fragments;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn indents_with_tabs() {
        let mut fragments = Fragments::default();
        fragments
            .schemas
            .insert("Hash".into(), json!({"type": "string"}));
        let text = render_document(&assemble(fragments)).unwrap();

        assert!(text.starts_with("{\n\t\"openrpc\": \"1.2.4\",\n\t\"info\": {\n\t\t\"title\""));
        assert!(text.contains("\n\t\t\t\"Hash\": {\n\t\t\t\t\"type\": \"string\"\n\t\t\t}"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn authored_key_order_survives() {
        let mut fragments = Fragments::default();
        fragments.methods.push(json!({
            "name": "portal_ping",
            "summary": "ping",
            "params": [],
            "result": {"name": "pong", "schema": true}
        }));
        fragments
            .schemas
            .insert("Zeta".into(), json!({"type": "string"}));
        fragments
            .schemas
            .insert("Alpha".into(), json!({"type": "string"}));
        let text = render_document(&assemble(fragments)).unwrap();

        let methods = &text[text.find("\"methods\"").unwrap()..];
        let pos = |key: &str| methods.find(&format!("\"{key}\"")).unwrap();
        assert!(pos("name") < pos("summary"));
        assert!(pos("summary") < pos("params"));
        assert!(pos("params") < pos("result"));
        assert!(pos("Zeta") < pos("Alpha"));
    }

    #[test]
    fn write_replaces_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("openrpc.json");
        fs::write(&path, "stale").unwrap();

        write_output(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
