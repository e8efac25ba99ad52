//! Inline local `$ref` pointers.
//!
//! Only document-local references (`#/...`) are resolved. Anything else is
//! left untouched. A reference chain that leads back to itself is rejected,
//! since the result would be infinite.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerefError {
    #[error("unresolvable reference {0:?}")]
    Unresolved(String),
    #[error("cyclic reference {0:?}")]
    Cycle(String),
}

/// Return a copy of `doc` with every local reference replaced by its target.
pub fn dereference(doc: &Value) -> Result<Value, DerefError> {
    let mut stack = Vec::new();
    resolve(doc, doc, &mut stack)
}

fn local_pointer(value: &Value) -> Option<&str> {
    match value {
        Value::Object(obj) => obj.get("$ref")?.as_str()?.strip_prefix('#'),
        _ => None,
    }
}

fn resolve(root: &Value, value: &Value, stack: &mut Vec<String>) -> Result<Value, DerefError> {
    if let Some(pointer) = local_pointer(value) {
        if stack.iter().any(|p| p == pointer) {
            return Err(DerefError::Cycle(format!("#{pointer}")));
        }
        let target = root
            .pointer(pointer)
            .ok_or_else(|| DerefError::Unresolved(format!("#{pointer}")))?;

        stack.push(pointer.to_string());
        let resolved = resolve(root, target, stack);
        stack.pop();
        return resolved;
    }

    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| resolve(root, item, stack))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(obj) => {
            let mut out = Map::new();
            for (key, item) in obj {
                out.insert(key.clone(), resolve(root, item, stack)?);
            }
            Ok(Value::Object(out))
        }
        other => Ok(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn inlines_nested_local_references() {
        let doc = json!({
            "methods": [{"result": {"$ref": "#/components/contentDescriptors/Enr"}}],
            "components": {
                "contentDescriptors": {
                    "Enr": {"name": "enr", "schema": {"$ref": "#/components/schemas/Enr"}}
                },
                "schemas": {"Enr": {"type": "string"}}
            }
        });

        let out = dereference(&doc).unwrap();
        assert_eq!(
            out["methods"][0]["result"],
            json!({"name": "enr", "schema": {"type": "string"}})
        );
    }

    #[test]
    fn leaves_remote_references_alone() {
        let doc = json!({"schema": {"$ref": "https://example.com/schema.json"}});
        assert_eq!(dereference(&doc).unwrap(), doc);
    }

    #[test]
    fn shared_target_is_not_a_cycle() {
        let doc = json!({
            "a": {"$ref": "#/defs/x"},
            "b": {"$ref": "#/defs/x"},
            "defs": {"x": {"type": "string"}}
        });
        let out = dereference(&doc).unwrap();
        assert_eq!(out["a"], out["b"]);
    }

    #[test]
    fn missing_target_is_reported() {
        let doc = json!({"a": {"$ref": "#/components/schemas/Nope"}});
        assert_eq!(
            dereference(&doc),
            Err(DerefError::Unresolved("#/components/schemas/Nope".into()))
        );
    }

    #[test]
    fn self_referential_schema_is_a_cycle() {
        let doc = json!({
            "defs": {
                "Node": {"type": "object", "properties": {"next": {"$ref": "#/defs/Node"}}}
            },
            "root": {"$ref": "#/defs/Node"}
        });
        assert!(matches!(dereference(&doc), Err(DerefError::Cycle(_))));
    }
}
