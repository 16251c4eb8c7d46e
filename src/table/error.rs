//! Error types for qualified-name table construction.

use std::sync::Arc;

use thiserror::Error;

use crate::base::QualifiedName;

/// A configuration error that makes an enum's qualified-name table ambiguous.
///
/// Always fatal for the type it names: no table is produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StructuralViolation {
    /// More than one member is marked as the unknown-value fallback.
    #[error(
        "{type_name}: duplicate unknown-value marker: '{second}' (already marked: '{first}')"
    )]
    DuplicateUnknownMarker {
        type_name: Arc<str>,
        first: Arc<str>,
        second: Arc<str>,
    },

    /// Two members resolve to the same qualified name.
    #[error("{type_name}: duplicate qualified-name value: {qname} ('{first}' and '{second}')")]
    DuplicateQualifiedName {
        type_name: Arc<str>,
        qname: QualifiedName,
        first: Arc<str>,
        second: Arc<str>,
    },
}

impl StructuralViolation {
    /// The enum type the violation was found in.
    pub fn type_name(&self) -> &str {
        match self {
            Self::DuplicateUnknownMarker { type_name, .. }
            | Self::DuplicateQualifiedName { type_name, .. } => type_name,
        }
    }

    /// The member whose declaration triggered the violation.
    pub fn member(&self) -> &str {
        match self {
            Self::DuplicateUnknownMarker { second, .. }
            | Self::DuplicateQualifiedName { second, .. } => second,
        }
    }

    /// The colliding qualified name, for duplicate-value violations.
    pub fn qualified_name(&self) -> Option<&QualifiedName> {
        match self {
            Self::DuplicateQualifiedName { qname, .. } => Some(qname),
            Self::DuplicateUnknownMarker { .. } => None,
        }
    }

    /// Diagnostic code for this violation.
    pub fn code(&self) -> &'static str {
        use super::diagnostics::codes;

        match self {
            Self::DuplicateUnknownMarker { .. } => codes::DUPLICATE_UNKNOWN_MARKER,
            Self::DuplicateQualifiedName { .. } => codes::DUPLICATE_QUALIFIED_NAME,
        }
    }
}
