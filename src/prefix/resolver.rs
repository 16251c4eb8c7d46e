//! Prefix assignment for namespace URIs during serialization.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::config::PrefixConfig;
use super::PrefixMapper;

/// Decides which prefix to bind a namespace URI to.
///
/// Immutable after construction and `Sync`, so one resolver can be shared by
/// any number of concurrent serialization passes.
#[derive(Clone, Debug, Default)]
pub struct PrefixResolver {
    default_namespace: Option<Arc<str>>,
    /// Namespace URI → configured prefix
    prefixes: FxHashMap<Arc<str>, SmolStr>,
}

impl PrefixResolver {
    /// Create a resolver from a default namespace and an override table.
    pub fn new<I, N, P>(default_namespace: impl Into<Arc<str>>, prefixes: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<Arc<str>>,
        P: Into<SmolStr>,
    {
        Self {
            default_namespace: Some(default_namespace.into()),
            prefixes: prefixes
                .into_iter()
                .map(|(namespace, prefix)| (namespace.into(), prefix.into()))
                .collect(),
        }
    }

    /// Create a resolver from a configuration value.
    pub fn from_config(config: &PrefixConfig) -> Self {
        Self {
            default_namespace: config.default_namespace.clone(),
            prefixes: config
                .prefixes
                .iter()
                .map(|(namespace, prefix)| (namespace.clone(), prefix.clone()))
                .collect(),
        }
    }

    /// Choose the prefix for `namespace_uri`.
    ///
    /// 1. A configured prefix for the URI wins over `suggested_prefix`.
    /// 2. Otherwise `suggested_prefix` is used unchanged.
    /// 3. If `must_have_prefix` is false and the URI is the default
    ///    namespace, the result is `""` regardless of 1 and 2.
    ///
    /// Never fails; the result may be empty.
    pub fn resolve_prefix<'a>(
        &'a self,
        namespace_uri: &str,
        suggested_prefix: &'a str,
        must_have_prefix: bool,
    ) -> &'a str {
        if !must_have_prefix && self.is_default_namespace(namespace_uri) {
            return "";
        }

        match self.prefixes.get(namespace_uri) {
            Some(prefix) => prefix.as_str(),
            None => suggested_prefix,
        }
    }

    /// The configured prefix for a namespace URI, if any.
    pub fn prefix_for(&self, namespace_uri: &str) -> Option<&str> {
        self.prefixes.get(namespace_uri).map(SmolStr::as_str)
    }

    pub fn default_namespace(&self) -> Option<&str> {
        self.default_namespace.as_deref()
    }

    /// Whether `namespace_uri` is the configured default namespace.
    ///
    /// Always false when no default namespace is configured.
    pub fn is_default_namespace(&self, namespace_uri: &str) -> bool {
        self.default_namespace.as_deref() == Some(namespace_uri)
    }

    /// Iterate over the configured overrides (unordered).
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.prefixes.iter().map(|(namespace, prefix)| (namespace.as_ref(), prefix.as_str()))
    }
}

impl From<PrefixConfig> for PrefixResolver {
    fn from(config: PrefixConfig) -> Self {
        Self {
            default_namespace: config.default_namespace,
            prefixes: config.prefixes.into_iter().collect(),
        }
    }
}

impl PrefixMapper for PrefixResolver {
    fn preferred_prefix<'a>(&'a self, namespace_uri: &str, suggestion: &'a str, require_prefix: bool) -> &'a str {
        self.resolve_prefix(namespace_uri, suggestion, require_prefix)
    }
}
