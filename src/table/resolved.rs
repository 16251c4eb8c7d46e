//! The resolved symbol table: symbolic name → qualified name.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::QualifiedName;

/// The value a symbolic name maps to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TableEntry {
    /// The member encodes as this qualified name.
    Resolved(QualifiedName),
    /// The unknown-value fallback; it has no qualified name of its own.
    Unknown,
}

impl TableEntry {
    /// The qualified name, if resolved.
    pub fn qualified_name(&self) -> Option<&QualifiedName> {
        match self {
            TableEntry::Resolved(qname) => Some(qname),
            TableEntry::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TableEntry::Unknown)
    }
}

/// An immutable, insertion-ordered qualified-name table for one enum type.
///
/// Only [`build`](super::build) constructs tables, so every instance upholds:
/// - resolved names are pairwise distinct
/// - at most one entry is [`TableEntry::Unknown`], and it is last
///
/// Forward lookups go through the ordered map; reverse lookups use a
/// pre-computed index.
#[derive(Clone, Debug, Default)]
pub struct ResolvedTable {
    /// Symbolic name → entry, in declaration order
    entries: IndexMap<Arc<str>, TableEntry>,
    /// Qualified name → symbolic name (reverse lookup)
    by_qname: FxHashMap<QualifiedName, Arc<str>>,
    /// Symbolic name of the unknown marker, if any
    unknown: Option<Arc<str>>,
}

impl ResolvedTable {
    /// Assemble a table from resolved entries and an optional unknown marker.
    ///
    /// The caller guarantees the invariants; see [`build`](super::build).
    pub(super) fn from_parts(
        resolved: IndexMap<Arc<str>, QualifiedName>,
        unknown: Option<Arc<str>>,
    ) -> Self {
        let by_qname = resolved
            .iter()
            .map(|(symbol, qname)| (qname.clone(), symbol.clone()))
            .collect();

        let mut entries: IndexMap<Arc<str>, TableEntry> = resolved
            .into_iter()
            .map(|(symbol, qname)| (symbol, TableEntry::Resolved(qname)))
            .collect();
        if let Some(marker) = &unknown {
            entries.insert(marker.clone(), TableEntry::Unknown);
        }

        Self {
            entries,
            by_qname,
            unknown,
        }
    }

    /// Look up the entry for a symbolic name.
    pub fn get(&self, symbolic_name: &str) -> Option<&TableEntry> {
        self.entries.get(symbolic_name)
    }

    /// Look up the qualified name a symbolic name encodes as.
    ///
    /// Returns `None` for unknown, excluded and unknown-marker members.
    pub fn qualified_name(&self, symbolic_name: &str) -> Option<&QualifiedName> {
        self.get(symbolic_name).and_then(TableEntry::qualified_name)
    }

    /// Decode a qualified name back to its symbolic name.
    ///
    /// When no resolved entry matches, falls back to the unknown marker.
    /// Returns `None` only if nothing matches and the type has no marker.
    pub fn symbol_for(&self, qname: &QualifiedName) -> Option<&str> {
        self.by_qname
            .get(qname)
            .or(self.unknown.as_ref())
            .map(|s| s.as_ref())
    }

    /// Decode a qualified name, without the unknown-marker fallback.
    pub fn symbol_for_exact(&self, qname: &QualifiedName) -> Option<&str> {
        self.by_qname.get(qname).map(|s| s.as_ref())
    }

    /// Symbolic name of the unknown-value marker.
    pub fn unknown_marker(&self) -> Option<&str> {
        self.unknown.as_deref()
    }

    /// Check if a symbolic name has an entry.
    pub fn contains(&self, symbolic_name: &str) -> bool {
        self.entries.contains_key(symbolic_name)
    }

    /// Iterate over entries in declaration order (unknown marker last).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableEntry)> + '_ {
        self.entries.iter().map(|(symbol, entry)| (symbol.as_ref(), entry))
    }

    /// Iterate over the resolved qualified names, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &QualifiedName> + '_ {
        self.entries.values().filter_map(TableEntry::qualified_name)
    }

    /// Get the number of entries, including the unknown marker.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Structural equality: same entries in the same order.
impl PartialEq for ResolvedTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for ResolvedTable {}
