//! Base-type kinds and the wire types they map to.

use std::fmt;

/// XML Schema namespace, home of the `QName` and `anyURI` simple types.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// How the values of a qualified-name enum are represented downstream.
///
/// Declared once per enum type by the introspection layer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseTypeKind {
    /// Values render as namespace + local part pairs.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "QNAME"))]
    QName,
    /// Values render as URIs.
    #[cfg_attr(feature = "serde", serde(rename = "URI"))]
    Uri,
}

impl BaseTypeKind {
    /// The wire type a codec uses for values of this kind.
    pub const fn wire_type(self) -> WireType {
        match self {
            BaseTypeKind::Uri => WireType::AnyUri,
            BaseTypeKind::QName => WireType::QName,
        }
    }
}

/// The representable wire type of a qualified-name enum.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum WireType {
    /// `xs:QName`
    QName,
    /// `xs:anyURI`
    AnyUri,
}

impl WireType {
    /// Local name of the corresponding XML Schema simple type.
    pub const fn xsd_local_name(self) -> &'static str {
        match self {
            WireType::QName => "QName",
            WireType::AnyUri => "anyURI",
        }
    }

    /// Namespace of the corresponding XML Schema simple type.
    pub const fn xsd_namespace(self) -> &'static str {
        XSD_NAMESPACE
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xs:{}", self.xsd_local_name())
    }
}
