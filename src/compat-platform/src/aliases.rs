//! The deprecated `is_<platform>` aliases and their static declarations.

use compat_shim::overlay::same_names;
use compat_shim::{AliasTable, Declaration, Overlay, Result, Value, ValueType};

use crate::platform::PlatformInfo;

/// Message template shared by every platform alias.
pub const ALIAS_MESSAGE: &str = "{name} and other is_<platform> aliases are deprecated. \
     Write the desired PlatformInfo::os_name or PlatformInfo::platform check explicitly instead.";

/// A deprecated platform flag.
#[derive(Debug, Clone, Copy)]
pub struct PlatformAlias {
    pub name: &'static str,
    pub fact: fn(&PlatformInfo) -> bool,
}

pub const PLATFORM_ALIASES: &[PlatformAlias] = &[
    PlatformAlias {
        name: "is_win",
        fact: PlatformInfo::is_win,
    },
    PlatformAlias {
        name: "is_posix",
        fact: PlatformInfo::is_posix,
    },
    PlatformAlias {
        name: "is_darwin",
        fact: PlatformInfo::is_darwin,
    },
];

const DECLARATIONS: &[Declaration] = &[
    Declaration::new("is_win", ValueType::Bool),
    Declaration::new("is_posix", ValueType::Bool),
    Declaration::new("is_darwin", ValueType::Bool),
];

/// Names and types of [`PLATFORM_ALIASES`] for static tooling.
pub const PLATFORM_OVERLAY: Overlay = Overlay::new(DECLARATIONS);

const ALIAS_NAMES: [&str; PLATFORM_ALIASES.len()] = {
    let mut names = [""; PLATFORM_ALIASES.len()];
    let mut i = 0;
    while i < names.len() {
        names[i] = PLATFORM_ALIASES[i].name;
        i += 1;
    }
    names
};

// Alias names must be exactly the declared names, each once.
const _: () = assert!(
    same_names(&ALIAS_NAMES, DECLARATIONS),
    "platform aliases and overlay declarations differ"
);

/// Build the alias table for `platform`.
pub fn alias_table(platform: &PlatformInfo) -> Result<AliasTable> {
    let mut builder = AliasTable::builder();
    for alias in PLATFORM_ALIASES {
        let platform = platform.clone();
        let fact = alias.fact;
        builder = builder.alias(alias.name, ALIAS_MESSAGE, move || {
            Value::Bool(fact(&platform))
        });
    }

    let table = builder.build()?;
    PLATFORM_OVERLAY.verify(&table)?;
    Ok(table)
}
