//! Module proxy with live attributes and a deprecated-alias fallback.

use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::alias::AliasTable;
use crate::config::ShimConfig;
use crate::error::{AttributeError, Result, ShimError};
use crate::value::Value;
use crate::warnings::{DeprecationWarning, RecordingSink, TracingSink, WarningSink};

/// A module-like namespace.
///
/// [`ModuleShim::getattr`] consults live attributes first. Only names that
/// are not live reach [`ModuleShim::resolve_missing`], which serves
/// deprecated aliases and rejects everything else.
#[derive(Clone)]
pub struct ModuleShim {
    path: Arc<str>,
    attributes: Arc<IndexMap<String, Value>>,
    aliases: Arc<AliasTable>,
    sink: Arc<dyn WarningSink>,
}

impl ModuleShim {
    pub fn builder(path: impl Into<String>) -> ModuleShimBuilder {
        ModuleShimBuilder::new(path)
    }

    /// Dotted module path, e.g. `git.compat`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fully-qualified name of `name` within this module.
    pub fn qualname(&self, name: &str) -> String {
        format!("{}.{}", self.path, name)
    }

    /// Read an attribute.
    pub fn getattr(&self, name: &str) -> std::result::Result<Value, AttributeError> {
        if let Some(value) = self.attributes.get(name) {
            return Ok(value.clone());
        }
        self.resolve_missing(name)
    }

    /// Fallback for names that are not live attributes.
    ///
    /// On an alias hit exactly one warning is emitted and the provider is
    /// invoked; there is no caching and no deduplication.
    pub fn resolve_missing(&self, name: &str) -> std::result::Result<Value, AttributeError> {
        let Some(entry) = self.aliases.lookup(name) else {
            tracing::debug!(module = %self.path, name, "attribute not found");
            return Err(AttributeError::missing(&*self.path, name));
        };

        let qualname = self.qualname(name);
        let message = entry.render_message(&qualname);
        tracing::trace!(module = %self.path, name, "resolving deprecated alias");
        self.sink.emit(DeprecationWarning::new(qualname, message));

        Ok(entry.resolve())
    }

    /// Whether `name` is a live attribute.
    pub fn is_live(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Whether `name` is a deprecated alias.
    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains(name)
    }

    /// Sorted names of live attributes and aliases.
    pub fn dir(&self) -> Vec<String> {
        self.attributes
            .keys()
            .map(String::as_str)
            .chain(self.aliases.names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// The same module, reporting warnings to `sink`.
    pub fn with_sink(&self, sink: Arc<dyn WarningSink>) -> Self {
        Self {
            path: self.path.clone(),
            attributes: self.attributes.clone(),
            aliases: self.aliases.clone(),
            sink,
        }
    }
}

impl std::fmt::Debug for ModuleShim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleShim")
            .field("path", &self.path)
            .field("attributes", &self.attributes)
            .field("aliases", &self.aliases.names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Run `f` against a view of `module` that records warnings, returning the
/// result and the warnings in emission order.
pub fn capture_warnings<R>(
    module: &ModuleShim,
    f: impl FnOnce(&ModuleShim) -> R,
) -> (R, Vec<DeprecationWarning>) {
    let recorder = Arc::new(RecordingSink::new());
    let scoped = module.with_sink(recorder.clone());
    let result = f(&scoped);
    (result, recorder.take())
}

/// Builder for [`ModuleShim`].
pub struct ModuleShimBuilder {
    path: String,
    attributes: IndexMap<String, Value>,
    aliases: AliasTable,
    sink: Option<Arc<dyn WarningSink>>,
}

impl ModuleShimBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            attributes: IndexMap::new(),
            aliases: AliasTable::default(),
            sink: None,
        }
    }

    /// Path and sink from configuration.
    pub fn config(mut self, config: &ShimConfig) -> Self {
        self.path = config.module_path.clone();
        self.sink = Some(config.sink());
        self
    }

    /// Define a live attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Defaults to [`TracingSink`].
    pub fn sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Result<ModuleShim> {
        if let Some(name) = self.aliases.names().find(|name| self.attributes.contains_key(*name)) {
            return Err(ShimError::AliasShadowsAttribute(name.to_string()));
        }

        Ok(ModuleShim {
            path: Arc::from(self.path),
            attributes: Arc::new(self.attributes),
            aliases: Arc::new(self.aliases),
            sink: self.sink.unwrap_or_else(|| Arc::new(TracingSink)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MESSAGE: &str = "{name} is deprecated. Use new_flag instead.";

    fn module(sink: Arc<dyn WarningSink>) -> ModuleShim {
        let aliases = AliasTable::builder()
            .alias("old_flag", MESSAGE, || Value::Bool(true))
            .build()
            .unwrap();

        ModuleShim::builder("pkg.mod")
            .attribute("new_flag", true)
            .aliases(aliases)
            .sink(sink)
            .build()
            .unwrap()
    }

    #[test]
    fn test_live_attribute_does_not_warn() {
        let sink = Arc::new(RecordingSink::new());
        let module = module(sink.clone());

        assert_eq!(module.getattr("new_flag").unwrap(), Value::Bool(true));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_alias_warns_and_resolves() {
        let sink = Arc::new(RecordingSink::new());
        let module = module(sink.clone());

        assert_eq!(module.getattr("old_flag").unwrap(), Value::Bool(true));
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].qualname, "pkg.mod.old_flag");
        assert_eq!(
            records[0].message,
            "pkg.mod.old_flag is deprecated. Use new_flag instead."
        );
    }

    #[test]
    fn test_unknown_name_is_error() {
        let sink = Arc::new(RecordingSink::new());
        let module = module(sink.clone());

        let err = module.getattr("foo").unwrap_err();
        assert_eq!(err, AttributeError::missing("pkg.mod", "foo"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_resolve_missing_ignores_live_attributes() {
        let module = module(Arc::new(RecordingSink::new()));
        assert!(module.resolve_missing("new_flag").is_err());
    }

    #[test]
    fn test_alias_shadowing_live_attribute_rejected() {
        let aliases = AliasTable::builder()
            .alias("flag", MESSAGE, || Value::Bool(true))
            .build()
            .unwrap();

        let result = ModuleShim::builder("pkg.mod")
            .attribute("flag", false)
            .aliases(aliases)
            .build();

        assert!(matches!(result, Err(ShimError::AliasShadowsAttribute(name)) if name == "flag"));
    }

    #[test]
    fn test_dir_lists_both_namespaces() {
        let module = module(Arc::new(RecordingSink::new()));
        assert_eq!(module.dir(), vec!["new_flag", "old_flag"]);
    }

    #[test]
    fn test_capture_warnings_scopes_sink() {
        let outer = Arc::new(RecordingSink::new());
        let module = module(outer.clone());

        let (value, warnings) = capture_warnings(&module, |m| m.getattr("old_flag"));
        assert_eq!(value.unwrap(), Value::Bool(true));
        assert_eq!(warnings.len(), 1);
        assert!(outer.is_empty());
    }

    #[test]
    fn test_config_sets_path() {
        let config = ShimConfig::new().with_module_path("other.mod");
        let module = ModuleShim::builder("pkg.mod").config(&config).build().unwrap();
        assert_eq!(module.path(), "other.mod");
    }
}
