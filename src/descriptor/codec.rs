//! YAML codec for component descriptors

use serde_json::Value;

use crate::config::SCHEMA_VERSION;
use crate::descriptor::error::CodecError;
use crate::descriptor::types::ComponentDescriptor;

/// Relation assigned to resources that do not declare one
const DEFAULT_RESOURCE_RELATION: &str = "local";

/// Decode a descriptor document (YAML or JSON)
pub fn decode(data: &[u8]) -> Result<ComponentDescriptor, CodecError> {
    let desc: ComponentDescriptor = serde_yaml::from_slice(data)?;

    if desc.meta.schema_version != SCHEMA_VERSION {
        return Err(CodecError::UnsupportedSchemaVersion(
            desc.meta.schema_version,
        ));
    }

    Ok(desc)
}

/// Encode a descriptor as YAML
///
/// Stamps the current schema version and fills in defaulted fields first.
/// The passed descriptor is left untouched.
pub fn encode(desc: &ComponentDescriptor) -> Result<Vec<u8>, CodecError> {
    let mut desc = desc.clone();
    desc.meta.schema_version = SCHEMA_VERSION.to_string();
    apply_defaults(&mut desc);

    Ok(serde_yaml::to_string(&desc)?.into_bytes())
}

/// Resources without a relation are local; local resources without a version
/// inherit the component version.
fn apply_defaults(desc: &mut ComponentDescriptor) {
    let component = &mut desc.component;

    for resource in &mut component.resources {
        if is_blank(resource.get("relation")) {
            resource.insert(
                "relation".to_string(),
                Value::String(DEFAULT_RESOURCE_RELATION.to_string()),
            );
        }
        let is_local = resource.get("relation").and_then(Value::as_str)
            == Some(DEFAULT_RESOURCE_RELATION);
        if is_local && is_blank(resource.get("version")) {
            resource.insert(
                "version".to_string(),
                Value::String(component.version.clone()),
            );
        }
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
