//! Qualified-name tables for enum types.
//!
//! ## Pipeline
//!
//! ```text
//! EnumDescription  (from the introspection layer)
//!   ↓ build()
//! ResolvedTable    symbolic name → Resolved(QName) | Unknown
//!   ↓
//! QNameEnumType    table + effective namespace + wire type
//!   ↓
//! EnumRegistry     built once per type, shared across consumers
//! ```

mod builder;
mod diagnostics;
mod error;
mod input;
mod model;
mod registry;
mod resolved;

pub use builder::{build, resolve_member};
pub use diagnostics::{
    check_enum, codes, Diagnostic, DiagnosticCollector, EnumChecker, RelatedInfo, Severity,
};
pub use error::StructuralViolation;
pub use input::{EnumDescription, MemberDescription, ValueOverride};
pub use model::QNameEnumType;
pub use registry::{build_all, EnumRegistry};
pub use resolved::{ResolvedTable, TableEntry};
