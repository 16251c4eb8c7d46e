//! Diagnostics — reporting every problem in an enum description.
//!
//! [`build`](super::build) stops at the first structural violation. Tooling
//! that wants the whole picture (an annotation processor listing all errors
//! of a type at once) uses [`check_enum`] instead, which never aborts.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::base::QualifiedName;
use super::builder::resolve_member;
use super::error::StructuralViolation;
use super::input::{EnumDescription, MemberDescription};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message attached to an enum type and, usually, a member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The enum type containing this diagnostic.
    pub type_name: Arc<str>,
    /// The offending member, if the problem is member-specific.
    pub member: Option<Arc<str>>,
    /// Severity level.
    pub severity: Severity,
    /// Error/warning code (e.g., "E0001").
    pub code: &'static str,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Optional related information.
    pub related: Vec<RelatedInfo>,
}

/// Related information for a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelatedInfo {
    /// The related member.
    pub member: Arc<str>,
    /// The message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(type_name: impl Into<Arc<str>>, code: &'static str, message: impl Into<Arc<str>>) -> Self {
        Self {
            type_name: type_name.into(),
            member: None,
            severity: Severity::Error,
            code,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(type_name: impl Into<Arc<str>>, code: &'static str, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(type_name, code, message)
        }
    }

    /// Set the offending member.
    pub fn with_member(mut self, member: impl Into<Arc<str>>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&StructuralViolation> for Diagnostic {
    fn from(violation: &StructuralViolation) -> Self {
        let diag = Diagnostic::error(violation.type_name(), violation.code(), violation.to_string())
            .with_member(violation.member());

        match violation {
            StructuralViolation::DuplicateUnknownMarker { first, .. } => diag.with_related(RelatedInfo {
                member: first.clone(),
                message: Arc::from(format!("'{}' is already the unknown-value marker", first)),
            }),
            StructuralViolation::DuplicateQualifiedName { first, qname, .. } => {
                diag.with_related(RelatedInfo {
                    member: first.clone(),
                    message: Arc::from(format!("'{}' already resolves to {}", first, qname)),
                })
            }
        }
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes for qualified-name enum problems.
pub mod codes {
    /// More than one unknown-value marker.
    pub const DUPLICATE_UNKNOWN_MARKER: &str = "E0001";
    /// Two members resolve to the same qualified name.
    pub const DUPLICATE_QUALIFIED_NAME: &str = "E0002";
    /// Member with an empty symbolic name.
    pub const EMPTY_SYMBOLIC_NAME: &str = "E0003";
    /// Two members share a symbolic name.
    pub const DUPLICATE_SYMBOLIC_NAME: &str = "E0004";

    /// Unknown-value marker carries value overrides that are ignored.
    pub const IGNORED_OVERRIDE: &str = "W0001";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics while checking one or more enum types.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add a duplicate unknown-marker error.
    pub fn duplicate_unknown_marker(&mut self, type_name: &Arc<str>, first: &Arc<str>, member: &MemberDescription) {
        self.add(Diagnostic::from(&StructuralViolation::DuplicateUnknownMarker {
            type_name: type_name.clone(),
            first: first.clone(),
            second: member.symbolic_name.clone(),
        }));
    }

    /// Add a duplicate qualified-name error.
    pub fn duplicate_qualified_name(
        &mut self,
        type_name: &Arc<str>,
        qname: QualifiedName,
        first: &Arc<str>,
        member: &MemberDescription,
    ) {
        self.add(Diagnostic::from(&StructuralViolation::DuplicateQualifiedName {
            type_name: type_name.clone(),
            qname,
            first: first.clone(),
            second: member.symbolic_name.clone(),
        }));
    }

    /// Add an empty symbolic name error.
    pub fn empty_symbolic_name(&mut self, type_name: &Arc<str>, position: usize) {
        self.add(Diagnostic::error(
            type_name.clone(),
            codes::EMPTY_SYMBOLIC_NAME,
            format!("{}: member #{} has an empty symbolic name", type_name, position),
        ));
    }

    /// Add a duplicate symbolic name error.
    pub fn duplicate_symbolic_name(&mut self, type_name: &Arc<str>, member: &MemberDescription) {
        self.add(
            Diagnostic::error(
                type_name.clone(),
                codes::DUPLICATE_SYMBOLIC_NAME,
                format!("{}: duplicate member '{}'", type_name, member.symbolic_name),
            )
            .with_member(member.symbolic_name.clone()),
        );
    }

    /// Add an ignored-override warning.
    pub fn ignored_override(&mut self, type_name: &Arc<str>, member: &MemberDescription) {
        self.add(
            Diagnostic::warning(
                type_name.clone(),
                codes::IGNORED_OVERRIDE,
                format!(
                    "{}: value override on unknown-value marker '{}' is ignored",
                    type_name, member.symbolic_name
                ),
            )
            .with_member(member.symbolic_name.clone()),
        );
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get diagnostics for a specific enum type.
    pub fn diagnostics_for_type(&self, type_name: &str) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| &*d.type_name == type_name).collect()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error).count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning).count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

// ============================================================================
// ENUM CHECKER
// ============================================================================

/// Checks an enum description, reporting every problem it finds.
pub struct EnumChecker<'a> {
    desc: &'a EnumDescription,
    collector: DiagnosticCollector,
}

impl<'a> EnumChecker<'a> {
    /// Create a new checker for a description.
    pub fn new(desc: &'a EnumDescription) -> Self {
        Self {
            desc,
            collector: DiagnosticCollector::new(),
        }
    }

    /// Run all checks.
    pub fn check(&mut self) {
        self.check_symbolic_names();
        self.check_unknown_markers();
        self.check_qualified_names();
    }

    fn check_symbolic_names(&mut self) {
        let type_name = &self.desc.type_name;
        let mut names: FxHashSet<&str> = FxHashSet::default();

        for (position, member) in self.desc.members.iter().enumerate() {
            if member.symbolic_name.is_empty() {
                self.collector.empty_symbolic_name(type_name, position);
            } else if !names.insert(&member.symbolic_name) {
                self.collector.duplicate_symbolic_name(type_name, member);
            }
        }
    }

    fn check_unknown_markers(&mut self) {
        let type_name = &self.desc.type_name;
        let mut first: Option<&Arc<str>> = None;

        for member in self.desc.members.iter().filter(|m| m.is_unknown_marker) {
            if member.has_override() {
                self.collector.ignored_override(type_name, member);
            }
            match first {
                Some(first) => self.collector.duplicate_unknown_marker(type_name, first, member),
                None => first = Some(&member.symbolic_name),
            }
        }
    }

    fn check_qualified_names(&mut self) {
        let type_name = &self.desc.type_name;
        let type_namespace = self.desc.effective_namespace();
        let mut seen: FxHashMap<QualifiedName, &Arc<str>> = FxHashMap::default();

        for member in &self.desc.members {
            if member.is_unknown_marker || member.is_excluded() {
                continue;
            }

            let qname = resolve_member(member, type_namespace);
            match seen.get(&qname) {
                Some(first) => self.collector.duplicate_qualified_name(type_name, qname, first, member),
                None => {
                    seen.insert(qname, &member.symbolic_name);
                }
            }
        }
    }

    /// Get the collected diagnostics.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.collector.diagnostics
    }
}

/// Check a description and return all diagnostics.
pub fn check_enum(desc: &EnumDescription) -> Vec<Diagnostic> {
    let mut checker = EnumChecker::new(desc);
    checker.check();
    checker.finish()
}
