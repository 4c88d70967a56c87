//! Sources for the current host's hardware identifier.
//!
//! Two implementations sit behind [`IdentifierSource`]:
//! - `SimulatorSource` reads the identifier the simulator host exports in an
//!   environment variable.
//! - `NativeSource` asks the kernel via `uname(2)` and decodes its `machine`
//!   field.
//!
//! [`host_source`] picks one at build time; [`source_from_config`] lets a
//! frontend override that choice.

use std::env;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ProbeConfig;

/// Environment variable the simulator host sets to the simulated model identifier.
pub const SIMULATOR_MODEL_IDENTIFIER: &str = "SIMULATOR_MODEL_IDENTIFIER";

/// Whether the identifier comes from real hardware or from a simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Native,
    Simulator,
}

impl Platform {
    pub fn is_simulated(self) -> bool {
        matches!(self, Platform::Simulator)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Native => "native",
            Platform::Simulator => "simulator",
        }
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The simulator environment did not export its model identifier.
    ///
    /// The simulator host guarantees this variable, so its absence means the
    /// environment itself is broken.
    #[error("Simulator environment is missing {variable}; cannot determine the simulated model")]
    MissingSimulatorVariable { variable: String },

    /// The simulator identifier variable is set but its value is not valid Unicode.
    #[error("Simulator variable {variable} is set but its value is not valid Unicode")]
    InvalidSimulatorVariable { variable: String },

    /// The `uname` system call failed.
    ///
    /// `uname` only fails for an invalid buffer pointer, so supported hosts
    /// never produce this.
    #[error("uname failed: {0}")]
    Uname(#[source] io::Error),

    /// The operating system reported an empty machine identifier.
    ///
    /// Supported kernels always fill the `machine` field.
    #[error("Operating system reported an empty machine identifier")]
    EmptyIdentifier,
}

/// Trait implemented by identifier sources (simulator environment, native hardware).
pub trait IdentifierSource: Send + Sync {
    /// Raw identifier of the host, e.g. `iPhone16,1`.
    fn identifier(&self) -> Result<String, ProbeError>;
    fn platform(&self) -> Platform;
    fn name(&self) -> &'static str;
}

impl<S: IdentifierSource + ?Sized> IdentifierSource for Box<S> {
    fn identifier(&self) -> Result<String, ProbeError> {
        (**self).identifier()
    }

    fn platform(&self) -> Platform {
        (**self).platform()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Reads the simulated model identifier from an environment variable.
#[derive(Debug, Clone)]
pub struct SimulatorSource {
    variable: String,
}

impl SimulatorSource {
    /// Source reading [`SIMULATOR_MODEL_IDENTIFIER`].
    pub fn new() -> Self {
        Self::with_variable(SIMULATOR_MODEL_IDENTIFIER)
    }

    /// Source reading a differently named variable.
    pub fn with_variable(variable: impl Into<String>) -> Self {
        Self { variable: variable.into() }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Default for SimulatorSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierSource for SimulatorSource {
    fn identifier(&self) -> Result<String, ProbeError> {
        match env::var(&self.variable) {
            Ok(value) if !value.is_empty() => {
                debug!(source = self.name(), identifier = %value, "read simulator identifier");
                Ok(value)
            }
            Err(env::VarError::NotUnicode(_)) => {
                warn!(variable = %self.variable, "simulator identifier is not valid Unicode");
                Err(ProbeError::InvalidSimulatorVariable { variable: self.variable.clone() })
            }
            Ok(_) | Err(env::VarError::NotPresent) => {
                warn!(variable = %self.variable, "simulator identifier variable is not set");
                Err(ProbeError::MissingSimulatorVariable { variable: self.variable.clone() })
            }
        }
    }

    fn platform(&self) -> Platform {
        Platform::Simulator
    }

    fn name(&self) -> &'static str {
        "simulator"
    }
}

/// Reads the machine identifier of the running hardware from the kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeSource;

impl IdentifierSource for NativeSource {
    fn identifier(&self) -> Result<String, ProbeError> {
        let identifier = machine_identifier()?;
        debug!(source = self.name(), identifier = %identifier, "read native identifier");
        Ok(identifier)
    }

    fn platform(&self) -> Platform {
        Platform::Native
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

#[cfg(unix)]
fn machine_identifier() -> Result<String, ProbeError> {
    let mut info = std::mem::MaybeUninit::<libc::utsname>::zeroed();
    // SAFETY: `info` is a valid, writable utsname; uname fills it in place.
    let rc = unsafe { libc::uname(info.as_mut_ptr()) };
    if rc != 0 {
        let err = io::Error::last_os_error();
        warn!(error = %err, "uname failed");
        return Err(ProbeError::Uname(err));
    }
    // SAFETY: zero-initialized and successfully populated by uname above.
    let info = unsafe { info.assume_init() };
    identifier_from_machine(&info.machine)
}

#[cfg(not(unix))]
fn machine_identifier() -> Result<String, ProbeError> {
    Ok(std::env::consts::ARCH.to_string())
}

/// Decode a NUL-terminated `machine` buffer, stopping at the first NUL byte.
///
/// A buffer without any NUL is decoded in full.
pub fn decode_machine(buf: &[std::ffi::c_char]) -> String {
    let bytes: Vec<u8> = buf.iter().map(|&c| c as u8).take_while(|&b| b != 0).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Decode a `machine` buffer into a non-empty identifier.
#[cfg(unix)]
fn identifier_from_machine(buf: &[std::ffi::c_char]) -> Result<String, ProbeError> {
    let identifier = decode_machine(buf);
    if identifier.is_empty() {
        warn!("uname returned an empty machine field");
        return Err(ProbeError::EmptyIdentifier);
    }
    Ok(identifier)
}

/// True when this crate was compiled for a simulator target.
pub const fn built_for_simulator() -> bool {
    cfg!(any(
        target_abi = "sim",
        all(
            any(
                target_os = "ios",
                target_os = "tvos",
                target_os = "watchos",
                target_os = "visionos"
            ),
            any(target_arch = "x86_64", target_arch = "x86")
        )
    ))
}

/// Source selected by the compilation target.
pub fn host_source() -> Box<dyn IdentifierSource> {
    if built_for_simulator() {
        Box::new(SimulatorSource::new())
    } else {
        Box::new(NativeSource)
    }
}

/// Source selected by runtime configuration, falling back to the build target.
pub fn source_from_config(config: &ProbeConfig) -> Box<dyn IdentifierSource> {
    if config.is_simulated() {
        Box::new(SimulatorSource::with_variable(&config.simulator_variable))
    } else {
        Box::new(NativeSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_chars(bytes: &[u8]) -> Vec<std::ffi::c_char> {
        bytes.iter().map(|&b| b as std::ffi::c_char).collect()
    }

    #[test]
    fn decode_stops_at_first_nul() {
        let buf = c_chars(b"iPhone16,1\0garbage\0\0");
        assert_eq!(decode_machine(&buf), "iPhone16,1");
    }

    #[test]
    fn decode_without_nul_uses_whole_buffer() {
        let buf = c_chars(b"arm64");
        assert_eq!(decode_machine(&buf), "arm64");
    }

    #[test]
    fn decode_of_leading_nul_is_empty() {
        let buf = c_chars(b"\0iPad16,6");
        assert_eq!(decode_machine(&buf), "");
    }

    #[test]
    #[cfg(unix)]
    fn empty_machine_field_is_an_error() {
        let buf = c_chars(b"\0\0\0\0");
        assert!(matches!(identifier_from_machine(&buf), Err(ProbeError::EmptyIdentifier)));
        assert_eq!(identifier_from_machine(&c_chars(b"x86_64\0")).unwrap(), "x86_64");
    }

    #[test]
    fn box_forwards_to_inner_source() {
        let boxed: Box<dyn IdentifierSource> = Box::new(NativeSource);
        assert_eq!(boxed.platform(), Platform::Native);
        assert_eq!(boxed.name(), "native");
    }
}
