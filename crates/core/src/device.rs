use serde::{Deserialize, Serialize};

use crate::catalog::ModelCatalog;
use crate::family::DeviceFamily;
use crate::probe::{host_source, IdentifierSource, Platform, ProbeError};

/// Appended to the current device's name when running under a simulator.
pub const SIMULATOR_SUFFIX: &str = " Simulator";

/// Everything known about the current device, gathered from a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub identifier: String,
    /// Display name, including the simulator suffix where applicable.
    pub model_name: String,
    /// Catalog name without decoration, if the identifier is known.
    pub base_model_name: Option<String>,
    pub family: Option<DeviceFamily>,
    pub platform: Platform,
    pub known: bool,
}

/// The current device, as seen through one identifier source.
///
/// ```no_run
/// use imodels_core::Device;
///
/// let device = Device::host();
/// println!("{}", device.model_name()?);
/// assert_eq!(Device::model_name_for("iPhone8,2"), Some("iPhone 6s Plus"));
/// # Ok::<(), imodels_core::ProbeError>(())
/// ```
#[derive(Debug)]
pub struct Device<S = Box<dyn IdentifierSource>> {
    source: S,
}

impl Device {
    /// Device backed by the source chosen for this compilation target.
    pub fn host() -> Self {
        Self { source: host_source() }
    }

    /// Undecorated catalog name for an explicit identifier.
    ///
    /// Never carries the simulator suffix, whatever the host is.
    pub fn model_name_for(identifier: &str) -> Option<&'static str> {
        ModelCatalog::global().name_for(identifier)
    }
}

impl<S: IdentifierSource> Device<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn platform(&self) -> Platform {
        self.source.platform()
    }

    /// Raw identifier of the device, e.g. `iPhone16,1`.
    pub fn identifier(&self) -> Result<String, ProbeError> {
        self.source.identifier()
    }

    /// Marketing name of the device.
    ///
    /// Unknown identifiers fall back to the raw identifier. Under a simulator
    /// the result carries [`SIMULATOR_SUFFIX`].
    pub fn model_name(&self) -> Result<String, ProbeError> {
        let identifier = self.identifier()?;
        Ok(self.decorate(resolve_or_raw(&identifier)))
    }

    /// Probe once and report identifier, names, family and platform.
    pub fn describe(&self) -> Result<DeviceReport, ProbeError> {
        let identifier = self.identifier()?;
        let base = ModelCatalog::global().name_for(&identifier);
        Ok(DeviceReport {
            model_name: self.decorate(resolve_or_raw(&identifier)),
            base_model_name: base.map(str::to_string),
            family: DeviceFamily::from_identifier(&identifier),
            platform: self.platform(),
            known: base.is_some(),
            identifier,
        })
    }

    fn decorate(&self, name: &str) -> String {
        if self.platform().is_simulated() {
            format!("{name}{SIMULATOR_SUFFIX}")
        } else {
            name.to_string()
        }
    }
}

fn resolve_or_raw(identifier: &str) -> &str {
    ModelCatalog::global().name_for(identifier).unwrap_or(identifier)
}
