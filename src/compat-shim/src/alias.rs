//! Alias table definitions.

use indexmap::IndexMap;

use crate::error::{Result, ShimError};
use crate::value::Value;

/// Placeholder replaced by the fully-qualified alias name when a message is rendered.
pub const NAME_PLACEHOLDER: &str = "{name}";

type Provider = Box<dyn Fn() -> Value + Send + Sync>;

/// A deprecated name together with the provider of its current value.
pub struct AliasEntry {
    name: String,
    message: String,
    provider: Provider,
}

impl AliasEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unrendered message template.
    pub fn message_template(&self) -> &str {
        &self.message
    }

    /// Render the deprecation message for `qualname`.
    pub fn render_message(&self, qualname: &str) -> String {
        self.message.replace(NAME_PLACEHOLDER, qualname)
    }

    /// Compute the current value. Never cached.
    pub fn resolve(&self) -> Value {
        (self.provider)()
    }
}

impl std::fmt::Debug for AliasEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasEntry")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Frozen mapping from deprecated name to [`AliasEntry`], in declaration order.
#[derive(Debug, Default)]
pub struct AliasTable {
    entries: IndexMap<String, AliasEntry>,
}

impl AliasTable {
    pub fn builder() -> AliasTableBuilder {
        AliasTableBuilder::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&AliasEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Alias names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Append-only builder for an [`AliasTable`].
#[derive(Default)]
pub struct AliasTableBuilder {
    entries: IndexMap<String, AliasEntry>,
    duplicates: Vec<String>,
}

impl AliasTableBuilder {
    /// Declare `name` as a deprecated alias.
    ///
    /// `message` must start with [`NAME_PLACEHOLDER`] so the rendered warning
    /// leads with the fully-qualified name.
    pub fn alias<F>(mut self, name: impl Into<String>, message: impl Into<String>, provider: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        let name = name.into();
        if self.entries.contains_key(&name) {
            self.duplicates.push(name);
            return self;
        }

        let entry = AliasEntry {
            name: name.clone(),
            message: message.into(),
            provider: Box::new(provider),
        };
        self.entries.insert(name, entry);
        self
    }

    /// Freeze the table.
    pub fn build(self) -> Result<AliasTable> {
        if let Some(name) = self.duplicates.into_iter().next() {
            return Err(ShimError::DuplicateAlias(name));
        }

        for entry in self.entries.values() {
            if !entry.message.starts_with(NAME_PLACEHOLDER) {
                return Err(ShimError::MessageTemplate {
                    name: entry.name.clone(),
                    template: entry.message.clone(),
                });
            }
        }

        Ok(AliasTable {
            entries: self.entries,
        })
    }
}
