//! Qualified-name table construction.
//!
//! Turns an [`EnumDescription`] into a validated [`ResolvedTable`]:
//!
//! 1. **Effective namespace** - declared, else package default, else `""`
//! 2. **Marker check** - at most one member may be the unknown-value fallback
//! 3. **Member walk** - in declaration order; excluded members are skipped,
//!    everything else resolved and checked for uniqueness
//! 4. **Unknown marker** - appended last, mapping to [`TableEntry::Unknown`]
//!
//! The first violation aborts the build; no partial table is ever returned.
//!
//! [`TableEntry::Unknown`]: super::TableEntry::Unknown

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::QualifiedName;
use super::error::StructuralViolation;
use super::input::{EnumDescription, MemberDescription};
use super::resolved::ResolvedTable;

/// Resolve the qualified name a member encodes as.
///
/// Member namespace override wins over `type_namespace`; local-part override
/// wins over the symbolic name.
pub fn resolve_member(member: &MemberDescription, type_namespace: &str) -> QualifiedName {
    let value_override = member.value_override.as_ref();

    let namespace = value_override
        .and_then(|o| o.namespace.clone())
        .unwrap_or_else(|| Arc::from(type_namespace));
    let local_part = value_override
        .and_then(|o| o.local_part.clone())
        .unwrap_or_else(|| member.symbolic_name.clone());

    QualifiedName::new(namespace, local_part)
}

/// Find the single unknown-value marker, if any.
///
/// Runs before any qualified name is resolved, so a doubly marked type is
/// reported as such even when it also has colliding values.
fn find_unknown_marker(desc: &EnumDescription) -> Result<Option<Arc<str>>, StructuralViolation> {
    let mut unknown: Option<Arc<str>> = None;

    for member in desc.members.iter().filter(|m| m.is_unknown_marker) {
        if let Some(first) = &unknown {
            return Err(StructuralViolation::DuplicateUnknownMarker {
                type_name: desc.type_name.clone(),
                first: first.clone(),
                second: member.symbolic_name.clone(),
            });
        }

        if member.has_override() {
            tracing::warn!(
                type_name = %desc.type_name,
                member = %member.symbolic_name,
                "value override on unknown-value marker is ignored"
            );
        }
        unknown = Some(member.symbolic_name.clone());
    }

    Ok(unknown)
}

/// Build the qualified-name table for an enum type.
///
/// # Errors
///
/// Returns [`StructuralViolation`] on the first of:
/// - a second member marked as the unknown-value fallback
/// - a qualified name already produced by an earlier member
pub fn build(desc: &EnumDescription) -> Result<ResolvedTable, StructuralViolation> {
    let type_namespace = desc.effective_namespace();

    let unknown = find_unknown_marker(desc)?;

    let mut resolved: IndexMap<Arc<str>, QualifiedName> = IndexMap::with_capacity(desc.members.len());
    // Qualified name → member that produced it
    let mut seen: FxHashMap<QualifiedName, Arc<str>> = FxHashMap::default();

    for member in &desc.members {
        if member.is_unknown_marker {
            continue;
        }

        if member.is_excluded() {
            tracing::trace!(member = %member.symbolic_name, "excluded from qname table");
            continue;
        }

        let qname = resolve_member(member, type_namespace);
        if let Some(first) = seen.get(&qname) {
            return Err(StructuralViolation::DuplicateQualifiedName {
                type_name: desc.type_name.clone(),
                qname,
                first: first.clone(),
                second: member.symbolic_name.clone(),
            });
        }

        tracing::trace!(member = %member.symbolic_name, %qname, "resolved");
        seen.insert(qname.clone(), member.symbolic_name.clone());
        resolved.insert(member.symbolic_name.clone(), qname);
    }

    tracing::debug!(
        type_name = %desc.type_name,
        namespace = type_namespace,
        resolved = resolved.len(),
        has_unknown = unknown.is_some(),
        "built qname table"
    );

    Ok(ResolvedTable::from_parts(resolved, unknown))
}
