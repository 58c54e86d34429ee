//! Error types for module shims.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::ValueType;

/// Result type alias for shim construction and configuration.
pub type Result<T> = std::result::Result<T, ShimError>;

/// Raised when a name is neither a live attribute nor a known alias, or when
/// a typed read finds a value of another type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("module '{module}' has no attribute '{name}'")]
    Missing { module: String, name: String },

    #[error("attribute '{module}.{name}' is {actual}, expected {expected}")]
    WrongType {
        module: String,
        name: String,
        expected: ValueType,
        actual: ValueType,
    },
}

impl AttributeError {
    pub fn missing(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Missing {
            module: module.into(),
            name: name.into(),
        }
    }

    pub fn wrong_type(
        module: impl Into<String>,
        name: impl Into<String>,
        expected: ValueType,
        actual: ValueType,
    ) -> Self {
        Self::WrongType {
            module: module.into(),
            name: name.into(),
            expected,
            actual,
        }
    }

    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name, .. } | Self::WrongType { name, .. } => name,
        }
    }

    /// The module the lookup ran against.
    pub fn module(&self) -> &str {
        match self {
            Self::Missing { module, .. } | Self::WrongType { module, .. } => module,
        }
    }
}

/// Errors raised while building a shim or loading its configuration.
#[derive(Debug, Error)]
pub enum ShimError {
    #[error("Alias '{0}' is declared more than once")]
    DuplicateAlias(String),

    #[error("Alias '{0}' collides with a live attribute of the same name")]
    AliasShadowsAttribute(String),

    #[error("Deprecation message for alias '{name}' must start with {{name}}: {template}")]
    MessageTemplate { name: String, template: String },

    #[error("Overlay out of sync with alias table (undeclared: {missing:?}, not aliased: {extra:?})")]
    OverlayMismatch {
        missing: Vec<String>,
        extra: Vec<String>,
    },

    #[error("Overlay declares '{name}' as {declared} but it resolves to {actual}")]
    OverlayType {
        name: String,
        declared: ValueType,
        actual: ValueType,
    },

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
