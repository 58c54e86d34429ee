//! Deprecated attribute aliases for module-like APIs.
//!
//! A [`ModuleShim`] resolves live attributes first and only falls back to its
//! [`AliasTable`] when a name is not live. Alias hits emit a
//! [`DeprecationWarning`] through an injected [`WarningSink`] and return the
//! current value; anything else is an [`AttributeError`].
//!
//! The [`Overlay`] declares the same alias names with their value types for
//! static tooling. It never takes part in resolution, so it must be kept in
//! lockstep with the alias table (see [`Overlay::verify`] and
//! [`overlay::same_names`]).

pub mod alias;
pub mod config;
pub mod error;
pub mod module;
pub mod overlay;
pub mod value;
pub mod warnings;

pub use alias::{AliasEntry, AliasTable, AliasTableBuilder, NAME_PLACEHOLDER};
pub use config::{ShimConfig, WarningMode};
pub use error::{AttributeError, Result, ShimError};
pub use module::{ModuleShim, ModuleShimBuilder, capture_warnings};
pub use overlay::{Declaration, Overlay};
pub use value::{Value, ValueType};
pub use warnings::{
    DeprecationWarning, NullSink, RecordingSink, TracingSink, WarningCategory, WarningSink,
};
