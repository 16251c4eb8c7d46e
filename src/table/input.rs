//! Input types handed over by the introspection layer.

use std::sync::Arc;

use crate::base::BaseTypeKind;

/// Per-member customization of the qualified name.
///
/// Absent fields fall back to the type-level defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ValueOverride {
    /// Replaces the type-level namespace for this member.
    pub namespace: Option<Arc<str>>,
    /// Replaces the symbolic name as local part.
    pub local_part: Option<Arc<str>>,
    /// Leave this member out of the table entirely.
    pub excluded: bool,
}

impl ValueOverride {
    /// An override that excludes the member.
    pub fn excluded() -> Self {
        Self {
            excluded: true,
            ..Self::default()
        }
    }

    /// Set the namespace override.
    pub fn with_namespace(mut self, namespace: impl Into<Arc<str>>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the local-part override.
    pub fn with_local_part(mut self, local_part: impl Into<Arc<str>>) -> Self {
        self.local_part = Some(local_part.into());
        self
    }

    /// Whether this override changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.namespace.is_none() && self.local_part.is_none() && !self.excluded
    }
}

/// One enum constant, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MemberDescription {
    /// The constant's identifier. Non-empty and unique within its type.
    pub symbolic_name: Arc<str>,
    /// Marks the fallback member used for unrecognized values.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_unknown_marker: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value_override: Option<ValueOverride>,
}

impl MemberDescription {
    /// A plain member with no annotations.
    pub fn new(symbolic_name: impl Into<Arc<str>>) -> Self {
        Self {
            symbolic_name: symbolic_name.into(),
            is_unknown_marker: false,
            value_override: None,
        }
    }

    /// A member marked as the unknown-value fallback.
    pub fn unknown(symbolic_name: impl Into<Arc<str>>) -> Self {
        Self {
            is_unknown_marker: true,
            ..Self::new(symbolic_name)
        }
    }

    /// Attach a value override.
    pub fn with_override(mut self, value_override: ValueOverride) -> Self {
        self.value_override = Some(value_override);
        self
    }

    /// Whether the member is excluded from the table.
    pub fn is_excluded(&self) -> bool {
        self.value_override.as_ref().is_some_and(|o| o.excluded)
    }

    /// Whether the member carries a non-empty override.
    pub fn has_override(&self) -> bool {
        self.value_override.as_ref().is_some_and(|o| !o.is_empty())
    }
}

/// A qualified-name enum type as described by the introspection layer.
///
/// Built once per enum type and discarded after its table is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EnumDescription {
    /// Fully qualified name of the enum type (e.g. `com.acme.Color`).
    pub type_name: Arc<str>,
    /// Explicit namespace for the whole type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub declared_namespace: Option<Arc<str>>,
    /// Namespace of the enclosing package.
    #[cfg_attr(feature = "serde", serde(default))]
    pub package_default_namespace: Option<Arc<str>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_type: BaseTypeKind,
    /// Members in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<MemberDescription>,
}

impl EnumDescription {
    /// Create an empty description for a type.
    pub fn new(type_name: impl Into<Arc<str>>) -> Self {
        Self {
            type_name: type_name.into(),
            declared_namespace: None,
            package_default_namespace: None,
            base_type: BaseTypeKind::default(),
            members: Vec::new(),
        }
    }

    /// Set the explicit type-level namespace.
    pub fn with_declared_namespace(mut self, namespace: impl Into<Arc<str>>) -> Self {
        self.declared_namespace = Some(namespace.into());
        self
    }

    /// Set the package default namespace.
    pub fn with_package_namespace(mut self, namespace: impl Into<Arc<str>>) -> Self {
        self.package_default_namespace = Some(namespace.into());
        self
    }

    /// Set the base-type kind.
    pub fn with_base_type(mut self, base_type: BaseTypeKind) -> Self {
        self.base_type = base_type;
        self
    }

    /// Append a member.
    pub fn with_member(mut self, member: MemberDescription) -> Self {
        self.members.push(member);
        self
    }

    /// The namespace members use unless they override it.
    ///
    /// Declared namespace, then package default, then the empty string.
    pub fn effective_namespace(&self) -> &str {
        self.declared_namespace
            .as_deref()
            .or(self.package_default_namespace.as_deref())
            .unwrap_or("")
    }
}
