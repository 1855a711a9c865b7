//! Serde model of a v2 component descriptor
//!
//! Only the fields the updater reads or writes are typed. Everything else is
//! kept in `extra` maps so a decode/encode round trip preserves it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped structured payload (access specs, labels, resources, ...)
pub type UnstructuredMap = serde_json::Map<String, Value>;

/// A component descriptor document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub meta: Metadata,
    pub component: ComponentSpec,
    #[serde(flatten)]
    pub extra: UnstructuredMap,
}

/// Document-level metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub schema_version: String,
}

/// The component section: identity plus dependencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Repository identity of the component itself (e.g., "github.com/acme/app")
    pub name: String,
    /// Own version, `v`-prefixed
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default)]
    pub repository_contexts: Vec<UnstructuredMap>,
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
    #[serde(default)]
    pub component_references: Vec<UnstructuredMap>,
    #[serde(default)]
    pub resources: Vec<UnstructuredMap>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<UnstructuredMap>,
    #[serde(flatten)]
    pub extra: UnstructuredMap,
}

/// One dependency reference of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    #[serde(default)]
    pub name: String,
    /// Access kind; only "git" is resolvable
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub access: UnstructuredMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<UnstructuredMap>,
    #[serde(flatten)]
    pub extra: UnstructuredMap,
}

/// Typed view of a git source's access payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubAccess {
    #[serde(rename = "type")]
    pub access_type: String,
    pub repo_url: String,
    #[serde(rename = "ref", default)]
    pub git_ref: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub commit: String,
    #[serde(flatten)]
    pub extra: UnstructuredMap,
}

impl GitHubAccess {
    /// Interprets an untyped access payload.
    pub fn from_unstructured(access: &UnstructuredMap) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(access.clone()))
    }

    /// Converts back into the untyped form stored in the descriptor.
    pub fn to_unstructured(&self) -> Result<UnstructuredMap, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "access serialized to a non-object value: {other}"
            ))),
        }
    }
}
