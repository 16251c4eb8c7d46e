//! The type model object for a qualified-name enum.

use std::sync::Arc;

use crate::base::{BaseTypeKind, QualifiedName, WireType};
use super::builder::build;
use super::error::StructuralViolation;
use super::input::EnumDescription;
use super::resolved::{ResolvedTable, TableEntry};

/// A fully resolved qualified-name enum type.
///
/// This is what codec and schema generators query. It is immutable once
/// built; rebuilding the model means constructing a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QNameEnumType {
    type_name: Arc<str>,
    namespace: Arc<str>,
    base_type: BaseTypeKind,
    table: ResolvedTable,
}

impl QNameEnumType {
    /// Resolve a description into a type model.
    ///
    /// # Errors
    ///
    /// Fails with the [`StructuralViolation`] reported by [`build`].
    pub fn new(desc: &EnumDescription) -> Result<Self, StructuralViolation> {
        let table = build(desc)?;
        Ok(Self {
            type_name: desc.type_name.clone(),
            namespace: Arc::from(desc.effective_namespace()),
            base_type: desc.base_type,
            table,
        })
    }

    /// Fully qualified name of the enum type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Effective type-level namespace (may be empty).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn base_type(&self) -> BaseTypeKind {
        self.base_type
    }

    pub fn is_uri_base_type(&self) -> bool {
        self.base_type == BaseTypeKind::Uri
    }

    /// The wire type codecs render values with.
    pub fn wire_type(&self) -> WireType {
        self.base_type.wire_type()
    }

    pub fn table(&self) -> &ResolvedTable {
        &self.table
    }

    /// Encode direction: the entry for a symbolic name.
    pub fn encode(&self, symbolic_name: &str) -> Option<&TableEntry> {
        self.table.get(symbolic_name)
    }

    /// Decode direction: the symbolic name for a qualified name, falling back
    /// to the unknown marker.
    pub fn decode(&self, qname: &QualifiedName) -> Option<&str> {
        self.table.symbol_for(qname)
    }

    /// Qualified-name enums are enums.
    pub fn is_enum(&self) -> bool {
        true
    }

    /// Qualified-name enums are never simple types.
    pub fn is_simple(&self) -> bool {
        false
    }

    pub fn is_qname_enum(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::input::{MemberDescription, ValueOverride};

    fn status(base: BaseTypeKind) -> EnumDescription {
        EnumDescription::new("com.acme.Status")
            .with_package_namespace("urn:pkg")
            .with_declared_namespace("urn:status")
            .with_base_type(base)
            .with_member(MemberDescription::new("OPEN"))
            .with_member(
                MemberDescription::new("CLOSED")
                    .with_override(ValueOverride::default().with_namespace("urn:legacy")),
            )
            .with_member(MemberDescription::unknown("OTHER"))
    }

    #[test]
    fn test_model_namespace_and_base_type() {
        let model = QNameEnumType::new(&status(BaseTypeKind::Uri)).unwrap();

        assert_eq!(model.type_name(), "com.acme.Status");
        assert_eq!(model.namespace(), "urn:status");
        assert!(model.is_uri_base_type());
        assert_eq!(model.wire_type(), WireType::AnyUri);
        assert!(model.is_enum() && model.is_qname_enum() && !model.is_simple());
    }

    #[test]
    fn test_model_qname_base_type() {
        let model = QNameEnumType::new(&status(BaseTypeKind::QName)).unwrap();
        assert!(!model.is_uri_base_type());
        assert_eq!(model.wire_type(), WireType::QName);
    }

    #[test]
    fn test_model_encode_decode() {
        let model = QNameEnumType::new(&status(BaseTypeKind::QName)).unwrap();

        let closed = QualifiedName::new("urn:legacy", "CLOSED");
        assert_eq!(model.encode("CLOSED"), Some(&TableEntry::Resolved(closed.clone())));
        assert_eq!(model.decode(&closed), Some("CLOSED"));
        assert_eq!(model.decode(&QualifiedName::new("urn:status", "CLOSED")), Some("OTHER"));
        assert_eq!(model.encode("OTHER"), Some(&TableEntry::Unknown));
    }
}
