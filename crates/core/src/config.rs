//! Configuration via `concord.toml`
//!
//! Every setting has a default, so an empty or missing file is valid.
//! Settings only pick between behaviours the contracts already allow
//! (stable vs unstable sort, which deterministic hasher); none of them
//! changes what equality, ordering or hashing mean.

use crate::contract::HasherKind;
use crate::error::{ConcordError, ConcordResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "concord.toml";

/// Default cap on values fed to the law checkers
pub const DEFAULT_MAX_LAW_SAMPLES: usize = 64;

/// How `sort`/`sorted` treat ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPolicy {
    /// Ties keep their input order
    #[default]
    Stable,
    /// Ties may be reordered
    Unstable,
}

/// Library configuration loaded from `concord.toml`.
///
/// # Example
///
/// ```toml
/// sort_policy = "stable"
/// hasher = "fx"
/// max_law_samples = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcordConfig {
    /// Tie handling for sorts: `"stable"` (default) or `"unstable"`
    #[serde(default)]
    pub sort_policy: SortPolicy,
    /// Hasher for hash codes and buckets: `"fx"` (default) or `"sip"`
    #[serde(default)]
    pub hasher: HasherKind,
    /// Upper bound on samples used by the law checkers
    #[serde(default = "default_max_law_samples")]
    pub max_law_samples: usize,
}

fn default_max_law_samples() -> usize {
    DEFAULT_MAX_LAW_SAMPLES
}

impl Default for ConcordConfig {
    fn default() -> Self {
        Self {
            sort_policy: SortPolicy::default(),
            hasher: HasherKind::default(),
            max_law_samples: default_max_law_samples(),
        }
    }
}

impl ConcordConfig {
    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> ConcordResult<()> {
        if self.max_law_samples == 0 {
            return Err(ConcordError::config(
                "max_law_samples must be at least 1",
            ));
        }
        Ok(())
    }

    /// Default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Concord configuration
#
# Sort policy: "stable" (default) or "unstable"
#   "stable"   = values that tie keep their input order
#   "unstable" = ties may be reordered
sort_policy = "stable"

# Hasher used for hash codes and set buckets: "fx" (default) or "sip"
hasher = "fx"

# Maximum number of sample values the law checkers look at.
# Transitivity is cubic in this number.
max_law_samples = 64
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> ConcordResult<Self> {
        let config: ConcordConfig = toml::from_str(content)
            .map_err(|e| ConcordError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> ConcordResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            ConcordError::Config(msg) => {
                ConcordError::config(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?;
        info!(
            path = %path.display(),
            sort_policy = ?config.sort_policy,
            hasher = %config.hasher,
            max_law_samples = config.max_law_samples,
            "Loaded concord config"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> ConcordResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> ConcordResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConcordError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
