//! Qualified names: a namespace URI paired with a local name.

use std::fmt;
use std::sync::Arc;

/// A namespace URI paired with a local part.
///
/// Equality and hashing are structural over `(namespace, local_part)`, which
/// makes `QualifiedName` usable directly as a uniqueness key. An empty
/// namespace means "no namespace".
///
/// Both parts are `Arc<str>`, so cloning a name is two refcount bumps.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct QualifiedName {
    namespace: Arc<str>,
    local_part: Arc<str>,
}

impl QualifiedName {
    /// Create a qualified name from a namespace URI and a local part.
    pub fn new(namespace: impl Into<Arc<str>>, local_part: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
            local_part: local_part.into(),
        }
    }

    /// Create a qualified name with no namespace.
    pub fn local(local_part: impl Into<Arc<str>>) -> Self {
        Self::new("", local_part)
    }

    /// The namespace URI (empty for "no namespace").
    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The local part.
    #[inline]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Whether this name has a non-empty namespace.
    #[inline]
    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({})", self)
    }
}

/// Renders in `{namespace}localPart` form, or just `localPart` when there is
/// no namespace.
impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_namespace() {
            write!(f, "{{{}}}{}", self.namespace, self.local_part)
        } else {
            f.write_str(&self.local_part)
        }
    }
}

impl<N, L> From<(N, L)> for QualifiedName
where
    N: Into<Arc<str>>,
    L: Into<Arc<str>>,
{
    #[inline]
    fn from((namespace, local_part): (N, L)) -> Self {
        Self::new(namespace, local_part)
    }
}
