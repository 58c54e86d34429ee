//! Static declaration overlay.
//!
//! An [`Overlay`] lists every alias name with its value type so tooling can
//! accept deprecated accesses without running the resolver. The resolver never
//! reads it; nothing at runtime notices drift, so owners should pin the two
//! together at compile time with [`same_names`] and run [`Overlay::verify`]
//! when the table is built.

use crate::alias::AliasTable;
use crate::error::{Result, ShimError};
use crate::value::ValueType;

/// A single name/type pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    pub name: &'static str,
    pub ty: ValueType,
}

impl Declaration {
    pub const fn new(name: &'static str, ty: ValueType) -> Self {
        Self { name, ty }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Overlay {
    declarations: &'static [Declaration],
}

impl Overlay {
    pub const fn new(declarations: &'static [Declaration]) -> Self {
        Self { declarations }
    }

    pub const fn declarations(&self) -> &'static [Declaration] {
        self.declarations
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.declarations.iter().map(|d| d.name)
    }

    /// Declared type of `name`, if declared.
    pub fn get(&self, name: &str) -> Option<ValueType> {
        self.declarations
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.ty)
    }

    /// Check that the declared names are exactly the table's alias names.
    pub fn verify(&self, table: &AliasTable) -> Result<()> {
        let missing: Vec<String> = table
            .names()
            .filter(|name| self.get(name).is_none())
            .map(str::to_string)
            .collect();
        let extra: Vec<String> = self
            .names()
            .filter(|name| !table.contains(name))
            .map(str::to_string)
            .collect();

        if missing.is_empty() && extra.is_empty() {
            Ok(())
        } else {
            Err(ShimError::OverlayMismatch { missing, extra })
        }
    }

    /// Resolve every alias once and compare its runtime type with the declared one.
    ///
    /// Goes straight to the providers, so no warnings are emitted.
    pub fn check_types(&self, table: &AliasTable) -> Result<()> {
        self.verify(table)?;

        for entry in table.entries() {
            let actual = entry.resolve().ty();
            if let Some(declared) = self.get(entry.name())
                && declared != actual
            {
                return Err(ShimError::OverlayType {
                    name: entry.name().to_string(),
                    declared,
                    actual,
                });
            }
        }

        Ok(())
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Whether `name` appears in `declarations`. Usable in `const` assertions.
pub const fn declares(declarations: &[Declaration], name: &str) -> bool {
    let mut i = 0;
    while i < declarations.len() {
        if str_eq(declarations[i].name, name) {
            return true;
        }
        i += 1;
    }
    false
}

/// Whether any name is declared twice. Usable in `const` assertions.
pub const fn has_duplicate_names(declarations: &[Declaration]) -> bool {
    let mut i = 0;
    while i < declarations.len() {
        let mut j = i + 1;
        while j < declarations.len() {
            if str_eq(declarations[i].name, declarations[j].name) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

const fn contains_name(names: &[&str], name: &str) -> bool {
    let mut i = 0;
    while i < names.len() {
        if str_eq(names[i], name) {
            return true;
        }
        i += 1;
    }
    false
}

/// Whether `names` and `declarations` hold exactly the same set of names,
/// each listed once. Usable in `const` assertions.
pub const fn same_names(names: &[&str], declarations: &[Declaration]) -> bool {
    if names.len() != declarations.len() || has_duplicate_names(declarations) {
        return false;
    }

    let mut i = 0;
    while i < names.len() {
        if !declares(declarations, names[i]) {
            return false;
        }
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }

    let mut i = 0;
    while i < declarations.len() {
        if !contains_name(names, declarations[i].name) {
            return false;
        }
        i += 1;
    }
    true
}
