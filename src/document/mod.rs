//! OpenRPC document model.
//!
//! Only the top-level envelope is typed. Methods and component entries stay
//! as raw JSON values: their structure is checked by `validate`, not by serde.

pub mod deref;
pub mod meta;
pub mod parse;
pub mod validate;

pub use parse::{ParseOptions, parse_document};

use crate::source::Fragments;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenRpcDocument {
    pub openrpc: String,
    pub info: Info,
    pub methods: Vec<Value>,
    pub components: Components,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(default)]
    pub content_descriptors: Map<String, Value>,
    #[serde(default)]
    pub schemas: Map<String, Value>,
    #[serde(default)]
    pub errors: Map<String, Value>,
}

/// Combine the fixed metadata block with loaded fragments.
pub fn assemble(fragments: Fragments) -> OpenRpcDocument {
    let Fragments {
        methods,
        schemas,
        content,
        errors,
    } = fragments;

    OpenRpcDocument {
        openrpc: meta::OPENRPC_VERSION.to_string(),
        info: Info {
            title: meta::TITLE.to_string(),
            description: Some(meta::DESCRIPTION.to_string()),
            license: Some(License {
                name: meta::LICENSE_NAME.to_string(),
                url: Some(meta::LICENSE_URL.to_string()),
            }),
            version: meta::VERSION.to_string(),
        },
        methods,
        components: Components {
            content_descriptors: content,
            schemas,
            errors,
        },
    }
}
