use std::env;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::layout::layout_type::DLayout;

/// Compile-time default for `KernelConfig::debug`.
pub const DEBUG_ENABLE: bool = true;

pub const ENV_DEBUG: &str = "DLAYOUT_DEBUG";
pub const ENV_DEFAULT_LAYOUT: &str = "DLAYOUT_DEFAULT";

/// Runtime settings shared by kernels that take a layout parameter.
///
/// # Fields
/// - `debug`          — emit debug-level diagnostics when layouts are resolved
/// - `default_layout` — layout used when a caller does not request one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub debug: bool,
    pub default_layout: DLayout,
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig::new(DLayout::default())
    }
}

impl KernelConfig {
    pub fn new(default_layout: DLayout) -> Self {
        KernelConfig {
            debug: DEBUG_ENABLE,
            default_layout,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Defaults overridden by `DLAYOUT_DEBUG` and `DLAYOUT_DEFAULT`.
    pub fn from_env() -> Result<Self> {
        KernelConfig::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = KernelConfig::default();

        if let Some(value) = lookup(ENV_DEBUG) {
            config.debug = parse_flag(&value).ok_or_else(|| LayoutError::InvalidEnv {
                var: ENV_DEBUG,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(ENV_DEFAULT_LAYOUT) {
            config.default_layout = DLayout::from_name_or_ordinal(&value).map_err(|_| {
                LayoutError::InvalidEnv {
                    var: ENV_DEFAULT_LAYOUT,
                    value: value.clone(),
                }
            })?;
        }

        Ok(config)
    }

    /// Picks `requested` when given, otherwise the configured default.
    pub fn resolve(&self, requested: Option<DLayout>) -> DLayout {
        let layout = requested.unwrap_or(self.default_layout);
        if self.debug {
            debug!(
                "resolved layout {} (ordinal {}, requested: {:?})",
                layout,
                layout.ordinal(),
                requested
            );
        }
        layout
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `KernelConfig` from a JSON file. Missing fields keep
    /// their defaults.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<KernelConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
