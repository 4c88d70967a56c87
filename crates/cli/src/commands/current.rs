use anyhow::{Context, Result};
use imodels_core::probe::source_from_config;
use imodels_core::{Device, DeviceReport, ProbeConfig};

fn device_for(config: &ProbeConfig) -> Device {
    Device::with_source(source_from_config(config))
}

/// Probe the current device and return its full report.
pub fn current_report(config: &ProbeConfig) -> Result<DeviceReport> {
    device_for(config).describe().context("Failed to determine the current device")
}

/// Show identifier, model name, family and platform of the current device.
pub fn show_command(config: &ProbeConfig, json: bool) -> Result<()> {
    let report = current_report(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let family = report.family.map(|f| f.display_name()).unwrap_or("(unknown)");
    println!("This Device");
    println!("  Identifier: {}", report.identifier);
    println!("  Model name: {}", report.model_name);
    println!("  Family: {}", family);
    println!("  Platform: {}", report.platform.as_str());
    if !report.known {
        println!("  (identifier not in catalog; showing raw identifier)");
    }

    Ok(())
}

/// Print the raw identifier of the current device.
pub fn identifier_command(config: &ProbeConfig, json: bool) -> Result<()> {
    let identifier =
        device_for(config).identifier().context("Failed to read the device identifier")?;
    if json {
        println!("{}", serde_json::json!({ "identifier": identifier }));
    } else {
        println!("{}", identifier);
    }
    Ok(())
}

/// Print the (possibly simulator-decorated) model name of the current device.
pub fn model_command(config: &ProbeConfig, json: bool) -> Result<()> {
    let model_name =
        device_for(config).model_name().context("Failed to resolve the device model name")?;
    if json {
        println!("{}", serde_json::json!({ "model_name": model_name }));
    } else {
        println!("{}", model_name);
    }
    Ok(())
}
