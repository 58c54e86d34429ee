//! Typed accessors for the deprecated aliases.
//!
//! These mirror [`PLATFORM_OVERLAY`](crate::aliases::PLATFORM_OVERLAY) for Rust
//! callers: the compiler sees a `bool` and reports the deprecation lint, and
//! names that were never aliased have no accessor at all. Each call still
//! goes through [`ModuleShim::getattr`], so the runtime warning is emitted and
//! a module without the alias fails the same way a dynamic read does.

use compat_shim::{AttributeError, ModuleShim, Value, ValueType};

fn read_flag(module: &ModuleShim, name: &str) -> Result<bool, AttributeError> {
    match module.getattr(name)? {
        Value::Bool(flag) => Ok(flag),
        other => Err(AttributeError::wrong_type(
            module.path(),
            name,
            ValueType::Bool,
            other.ty(),
        )),
    }
}

#[deprecated(note = "is_win and other is_<platform> aliases are deprecated; compare PlatformInfo::os_name with \"nt\"")]
pub fn is_win(module: &ModuleShim) -> Result<bool, AttributeError> {
    read_flag(module, "is_win")
}

#[deprecated(note = "is_posix and other is_<platform> aliases are deprecated; compare PlatformInfo::os_name with \"posix\"")]
pub fn is_posix(module: &ModuleShim) -> Result<bool, AttributeError> {
    read_flag(module, "is_posix")
}

#[deprecated(note = "is_darwin and other is_<platform> aliases are deprecated; compare PlatformInfo::platform with \"darwin\"")]
pub fn is_darwin(module: &ModuleShim) -> Result<bool, AttributeError> {
    read_flag(module, "is_darwin")
}
