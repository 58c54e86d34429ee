//! The `git.compat` module.
//!
//! Live attributes resolve directly. The `is_win`, `is_posix` and
//! `is_darwin` flags are deprecated aliases: reading them warns and returns
//! the current platform fact. Any other name is an error.
//!
//! ```rust,ignore
//! use compat_platform::git_compat;
//!
//! let is_win = git_compat().getattr("is_win")?; // warns
//! assert!(git_compat().getattr("foo").is_err());
//! ```

pub mod aliases;
pub mod deprecated;
pub mod encoding;
pub mod platform;

use std::sync::Arc;

use compat_shim::{ModuleShim, Result, ShimConfig, TracingSink, WarningSink};
use once_cell::sync::Lazy;

pub use aliases::{ALIAS_MESSAGE, PLATFORM_ALIASES, PLATFORM_OVERLAY, PlatformAlias, alias_table};
pub use encoding::{DEFENC, Text, safe_decode, safe_encode, win_encode};
pub use platform::PlatformInfo;

/// Dotted path of the module.
pub const MODULE_PATH: &str = "git.compat";

// Cannot fail: alias and overlay names are pinned at compile time in
// `aliases`, templates lead with `{name}`, and `defenc` is not an alias.
static GIT_COMPAT: Lazy<ModuleShim> = Lazy::new(|| {
    build_module(PlatformInfo::current(), Arc::new(TracingSink))
        .expect("git.compat aliases, overlay and live attributes are consistent")
});

/// Process-wide module for the running platform, warning through `tracing`.
pub fn git_compat() -> &'static ModuleShim {
    &GIT_COMPAT
}

/// Build the module for `platform`, reporting warnings to `sink`.
pub fn build_module(platform: PlatformInfo, sink: Arc<dyn WarningSink>) -> Result<ModuleShim> {
    ModuleShim::builder(MODULE_PATH)
        .attribute("defenc", DEFENC)
        .aliases(alias_table(&platform)?)
        .sink(sink)
        .build()
}

/// Build the module for `platform` with path and sink taken from `config`.
pub fn build_module_with_config(platform: PlatformInfo, config: &ShimConfig) -> Result<ModuleShim> {
    tracing::debug!(module = %config.module_path, mode = ?config.warnings, "building compat module");
    ModuleShim::builder(MODULE_PATH)
        .config(config)
        .attribute("defenc", DEFENC)
        .aliases(alias_table(&platform)?)
        .build()
}
