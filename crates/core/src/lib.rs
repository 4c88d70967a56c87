//! imodels-core
//!
//! Core library for translating Apple hardware identifiers (e.g. `iPhone16,1`)
//! into marketing names (e.g. `iPhone 15 Pro`).
//!
//! This crate defines the static model catalog, the identifier sources used to
//! read the current host's identifier, device family classification, and the
//! `Device` facade tying them together.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, bindings, etc.).

pub mod catalog;
pub mod config;
pub mod device;
pub mod family;
pub mod probe;

pub use catalog::ModelCatalog;
pub use config::ProbeConfig;
pub use device::{Device, DeviceReport, SIMULATOR_SUFFIX};
pub use family::DeviceFamily;
pub use probe::{IdentifierSource, Platform, ProbeError};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Raw hardware identifier of the host this process runs on.
pub fn identifier() -> Result<String, ProbeError> {
    Device::host().identifier()
}

/// Marketing name of the host, falling back to its raw identifier.
///
/// On simulator builds the name carries the `" Simulator"` suffix.
pub fn model_name() -> Result<String, ProbeError> {
    Device::host().model_name()
}

/// Marketing name for an explicit identifier, without any decoration.
pub fn model_name_for(identifier: &str) -> Option<&'static str> {
    ModelCatalog::global().name_for(identifier)
}
