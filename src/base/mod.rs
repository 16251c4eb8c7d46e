//! Foundation value types.
//!
//! This module provides the primitives shared by the table builder and the
//! prefix resolver:
//! - [`QualifiedName`] - Namespace URI + local part
//! - [`BaseTypeKind`], [`WireType`] - How enum values are typed on the wire
//!
//! This module has NO dependencies on other crate modules.

mod qname;
mod wire;

pub use qname::QualifiedName;
pub use wire::{BaseTypeKind, WireType, XSD_NAMESPACE};
