//! Shim configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, ShimError};
use crate::warnings::{NullSink, TracingSink, WarningSink};

/// Module path used when none is configured.
pub const DEFAULT_MODULE_PATH: &str = "git.compat";

/// What the default sink does with deprecation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningMode {
    /// Log through `tracing`.
    #[default]
    Log,
    /// Drop warnings.
    Silent,
}

/// Configuration read from the `[compat]` table of a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    /// Dotted module path used to qualify alias names in warnings.
    pub module_path: String,
    /// Default sink behaviour.
    pub warnings: WarningMode,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            module_path: DEFAULT_MODULE_PATH.to_string(),
            warnings: WarningMode::default(),
        }
    }
}

#[derive(Serialize)]
struct Document<'a> {
    compat: &'a ShimConfig,
}

impl ShimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = module_path.into();
        self
    }

    pub fn with_warnings(mut self, mode: WarningMode) -> Self {
        self.warnings = mode;
        self
    }

    /// Parse from TOML text. A missing `[compat]` table yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = content.parse()?;

        if let Some(section) = table.get("compat") {
            let config: ShimConfig = section.clone().try_into()?;
            return Ok(config);
        }

        Ok(Self::default())
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ShimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Save to a TOML file under a `[compat]` table.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&Document { compat: self })?;
        std::fs::write(path, content).map_err(|source| ShimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The sink selected by [`ShimConfig::warnings`].
    pub fn sink(&self) -> Arc<dyn WarningSink> {
        match self.warnings {
            WarningMode::Log => Arc::new(TracingSink),
            WarningMode::Silent => Arc::new(NullSink),
        }
    }
}
