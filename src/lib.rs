//! # qname-enum
//!
//! Qualified-name tables for enum types encoded as XML/JSON values, and
//! namespace prefix assignment for the documents they end up in.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! table   → EnumDescription → ResolvedTable, type models, diagnostics
//!   ↓
//! base    → Primitives (QualifiedName, BaseTypeKind, WireType)
//!
//! prefix  → PrefixResolver (independent of table)
//! ```
//!
//! ## Example
//!
//! ```
//! use qname_enum::table::{build, EnumDescription, MemberDescription, ValueOverride};
//! use qname_enum::QualifiedName;
//!
//! let desc = EnumDescription::new("com.acme.Color")
//!     .with_package_namespace("urn:x")
//!     .with_member(MemberDescription::new("A"))
//!     .with_member(
//!         MemberDescription::new("B").with_override(ValueOverride::default().with_local_part("bee")),
//!     )
//!     .with_member(MemberDescription::unknown("UNKNOWN"));
//!
//! let table = build(&desc)?;
//! assert_eq!(table.qualified_name("B"), Some(&QualifiedName::new("urn:x", "bee")));
//! assert_eq!(table.symbol_for(&QualifiedName::new("urn:x", "zzz")), Some("UNKNOWN"));
//! # Ok::<(), qname_enum::table::StructuralViolation>(())
//! ```

/// Foundation types: QualifiedName, base-type kinds
pub mod base;

/// Namespace → prefix assignment for serializers
pub mod prefix;

/// Qualified-name table construction and the enum type model
pub mod table;

// Re-export commonly needed items
pub use base::{BaseTypeKind, QualifiedName, WireType};
pub use prefix::{PrefixConfig, PrefixMapper, PrefixResolver};
pub use table::{
    build, EnumDescription, EnumRegistry, MemberDescription, QNameEnumType, ResolvedTable,
    StructuralViolation, TableEntry, ValueOverride,
};
