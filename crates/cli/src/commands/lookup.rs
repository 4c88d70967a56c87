use anyhow::Result;
use imodels_core::{Device, DeviceFamily};
use serde::Serialize;

/// Outcome of looking up an explicit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub identifier: String,
    /// Catalog name, or the identifier itself when unknown.
    pub model_name: String,
    pub family: Option<DeviceFamily>,
    pub known: bool,
}

pub fn lookup(identifier: &str) -> LookupResult {
    let name = Device::model_name_for(identifier);
    LookupResult {
        identifier: identifier.to_string(),
        model_name: name.unwrap_or(identifier).to_string(),
        family: DeviceFamily::from_identifier(identifier),
        known: name.is_some(),
    }
}

/// Look up an explicit identifier. Unknown identifiers are reported, not errors.
pub fn lookup_command(identifier: &str, json: bool) -> Result<()> {
    let result = lookup(identifier);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.known {
        println!("{}", result.model_name);
    } else {
        println!("{} (unknown identifier)", result.model_name);
    }
    Ok(())
}
