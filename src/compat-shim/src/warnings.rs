//! Deprecation warnings and the sinks that receive them.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Warning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningCategory {
    Deprecation,
}

impl std::fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deprecation => write!(f, "DeprecationWarning"),
        }
    }
}

/// One warning, emitted per deprecated access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecationWarning {
    /// Warning category.
    pub category: WarningCategory,
    /// Fully-qualified alias name, e.g. `git.compat.is_win`.
    pub qualname: String,
    /// Rendered message.
    pub message: String,
}

impl DeprecationWarning {
    pub fn new(qualname: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: WarningCategory::Deprecation,
            qualname: qualname.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for DeprecationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Receiver for warnings. Emission must not fail or block.
pub trait WarningSink: Send + Sync {
    fn emit(&self, warning: DeprecationWarning);
}

/// Logs each warning through `tracing` at WARN under the `deprecation` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn emit(&self, warning: DeprecationWarning) {
        tracing::warn!(
            target: "deprecation",
            name = %warning.qualname,
            category = %warning.category,
            "{}",
            warning.message
        );
    }
}

/// Drops every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn emit(&self, _warning: DeprecationWarning) {}
}

/// Records warnings in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<DeprecationWarning>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<DeprecationWarning> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|w| w.message.clone())
            .collect()
    }

    /// Drain the recorded warnings.
    pub fn take(&self) -> Vec<DeprecationWarning> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl WarningSink for RecordingSink {
    fn emit(&self, warning: DeprecationWarning) {
        self.records.lock().push(warning);
    }
}
