use anyhow::{anyhow, Result};
use imodels_core::catalog::CatalogEntry;
use imodels_core::{DeviceFamily, ModelCatalog};

/// Parse a `--family` value such as `iphone` or `apple_tv`.
pub fn parse_family(value: &str) -> Result<DeviceFamily> {
    DeviceFamily::parse(value).ok_or_else(|| {
        let allowed: Vec<_> = DeviceFamily::ALL.iter().map(|f| f.as_str()).collect();
        anyhow!("Invalid family '{}'. Allowed: {}", value, allowed.join(", "))
    })
}

/// Catalog rows, optionally restricted to one family.
pub fn catalog_entries(family: Option<DeviceFamily>) -> Vec<CatalogEntry> {
    let catalog = ModelCatalog::global();
    match family {
        Some(family) => catalog.entries_in(family),
        None => catalog.entries(),
    }
}

/// List known identifiers and their marketing names.
pub fn list_command(family: Option<&str>, json: bool) -> Result<()> {
    let family = family.map(parse_family).transpose()?;
    let entries = catalog_entries(family);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("Models: (none)");
        return Ok(());
    }

    println!("Models:");
    for entry in entries {
        println!("- {}: {}", entry.identifier, entry.name);
    }

    Ok(())
}
