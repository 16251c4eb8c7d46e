//! Prefix configuration: the default namespace and namespace → prefix overrides.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Configuration a [`PrefixResolver`](super::PrefixResolver) is built from.
///
/// Loaded by the caller from wherever it keeps serialization settings; with
/// the `serde` feature it deserializes from e.g.
///
/// ```json
/// { "defaultNamespace": "urn:x", "prefixes": { "urn:y": "y" } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PrefixConfig {
    /// Namespace rendered without a prefix when one isn't required.
    pub default_namespace: Option<Arc<str>>,
    /// Namespace URI → preferred prefix.
    pub prefixes: IndexMap<Arc<str>, SmolStr>,
}

impl PrefixConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default namespace.
    pub fn with_default_namespace(mut self, namespace: impl Into<Arc<str>>) -> Self {
        self.default_namespace = Some(namespace.into());
        self
    }

    /// Map a namespace URI to a preferred prefix. Later entries replace
    /// earlier ones for the same URI.
    pub fn with_prefix(mut self, namespace: impl Into<Arc<str>>, prefix: impl Into<SmolStr>) -> Self {
        self.prefixes.insert(namespace.into(), prefix.into());
        self
    }
}

impl<N, P> FromIterator<(N, P)> for PrefixConfig
where
    N: Into<Arc<str>>,
    P: Into<SmolStr>,
{
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |config, (namespace, prefix)| config.with_prefix(namespace, prefix))
    }
}
