//! Configuration system for the translation core.
//!
//! This module defines the configuration structures used to parameterize the
//! translation layer. It provides:
//! 1. **Defaults:** Baseline hardware constants (TLB capacity, page-size
//!    mode, split vs. unified organization).
//! 2. **Structures:** Hierarchical config for the MMU and its tables.
//!
//! Configuration is supplied as JSON via [`Config::from_json`], or use
//! `Config::default()` for the baseline machine.

use serde::Deserialize;

/// Default configuration constants for the translation core.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden.
mod defaults {
    /// Translation cache entry count.
    ///
    /// Number of entry slots per table. Each slot maps a pair of half-pages,
    /// so reach is twice this many pages.
    pub const TLB_SIZE: usize = 64;
}

/// Configuration for one translation cache instance.
#[derive(Debug, Clone, Deserialize)]
pub struct TlbConfig {
    /// Number of entry slots. Fixed at construction.
    #[serde(default = "TlbConfig::default_size")]
    pub size: usize,

    /// Initial page-size mode: `true` enables small (1 KiB) pages. Refreshed
    /// at runtime by every TLB-mutating operation.
    #[serde(default)]
    pub small_pages: bool,
}

impl TlbConfig {
    /// Returns the default entry count.
    fn default_size() -> usize {
        defaults::TLB_SIZE
    }
}

impl Default for TlbConfig {
    fn default() -> Self {
        Self {
            size: defaults::TLB_SIZE,
            small_pages: false,
        }
    }
}

/// MMU organization configuration.
///
/// A processor context either carries split instruction/data tables or one
/// unified table serving both translate paths.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MmuConfig {
    /// Instruction-side table configuration.
    #[serde(default)]
    pub itb: TlbConfig,

    /// Data-side table configuration.
    #[serde(default)]
    pub dtb: TlbConfig,

    /// When true, a single unified table (sized by `itb`) serves both
    /// translate paths and `dtb` is ignored.
    #[serde(default)]
    pub unified: bool,
}

/// Root configuration for the translation core.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// MMU and TLB configuration.
    #[serde(default)]
    pub mmu: MmuConfig,
}

impl Config {
    /// Deserializes a configuration from a JSON document.
    ///
    /// Missing fields take their defaults, so a partial document overriding
    /// a single value is valid.
    ///
    /// # Arguments
    ///
    /// * `json` - The configuration document.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the document is malformed or
    /// a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
