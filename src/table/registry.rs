//! Registry of built qualified-name enum types.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rayon::prelude::*;

use super::error::StructuralViolation;
use super::input::EnumDescription;
use super::model::QNameEnumType;

/// Build type models for many independent enum types in parallel.
///
/// Results come back in input order, one per description.
pub fn build_all(descs: &[EnumDescription]) -> Vec<Result<QNameEnumType, StructuralViolation>> {
    descs.par_iter().map(QNameEnumType::new).collect()
}

/// Caches type models by enum type name.
///
/// Each type is built at most once; later lookups share the same
/// `Arc<QNameEnumType>`. Thread-safe via internal locking.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    /// Type name → model, in registration order
    types: RwLock<IndexMap<Arc<str>, Arc<QNameEnumType>>>,
}

impl EnumRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the model for a description's type, building it on first use.
    ///
    /// Failed builds are not cached, so the same error is reported again on
    /// the next call.
    pub fn get_or_build(&self, desc: &EnumDescription) -> Result<Arc<QNameEnumType>, StructuralViolation> {
        // Fast path: read lock
        if let Some(model) = self.types.read().get(&desc.type_name) {
            return Ok(model.clone());
        }

        // Slow path: write lock
        let mut types = self.types.write();

        // Double-check
        if let Some(model) = types.get(&desc.type_name) {
            return Ok(model.clone());
        }

        let model = Arc::new(QNameEnumType::new(desc)?);
        types.insert(desc.type_name.clone(), model.clone());
        tracing::debug!(type_name = %desc.type_name, "registered qname enum");
        Ok(model)
    }

    /// Build and register many types, building the missing ones in parallel.
    ///
    /// Results come back in input order.
    pub fn register_all(
        &self,
        descs: &[EnumDescription],
    ) -> Vec<Result<Arc<QNameEnumType>, StructuralViolation>> {
        let built: Vec<_> = descs
            .par_iter()
            .map(|desc| match self.get(&desc.type_name) {
                Some(model) => Ok(model),
                None => QNameEnumType::new(desc).map(Arc::new),
            })
            .collect();

        let mut types = self.types.write();
        built
            .into_iter()
            .map(|result| {
                result.map(|model| {
                    let name: Arc<str> = Arc::from(model.type_name());
                    types.entry(name).or_insert(model).clone()
                })
            })
            .collect()
    }

    /// Get an already built model.
    pub fn get(&self, type_name: &str) -> Option<Arc<QNameEnumType>> {
        self.types.read().get(type_name).cloned()
    }

    /// Check if a type has been built.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.read().contains_key(type_name)
    }

    /// Names of all registered types, in registration order.
    pub fn type_names(&self) -> Vec<Arc<str>> {
        self.types.read().keys().cloned().collect()
    }

    /// Get the number of registered types.
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every model, so the next lookup rebuilds from scratch.
    pub fn clear(&self) {
        self.types.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::input::MemberDescription;

    fn desc(type_name: &str, members: &[&str]) -> EnumDescription {
        members.iter().fold(
            EnumDescription::new(type_name).with_package_namespace("urn:x"),
            |d, m| d.with_member(MemberDescription::new(*m)),
        )
    }

    #[test]
    fn test_registry_builds_once() {
        let registry = EnumRegistry::new();
        let d = desc("Color", &["RED", "GREEN"]);

        let a = registry.get_or_build(&d).unwrap();
        let b = registry.get_or_build(&d).unwrap();

        assert!(Arc::ptr_eq(&a, &b)); // same cached model
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_does_not_cache_failures() {
        let registry = EnumRegistry::new();
        let bad = EnumDescription::new("Bad")
            .with_member(MemberDescription::unknown("U1"))
            .with_member(MemberDescription::unknown("U2"));

        assert!(registry.get_or_build(&bad).is_err());
        assert!(!registry.contains("Bad"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_clear() {
        let registry = EnumRegistry::new();
        registry.get_or_build(&desc("Color", &["RED"])).unwrap();

        registry.clear();
        assert!(registry.get("Color").is_none());
    }

    #[test]
    fn test_register_all_preserves_order() {
        let registry = EnumRegistry::new();
        let descs = vec![
            desc("A", &["X"]),
            desc("B", &["X", "X2"]),
            EnumDescription::new("Bad")
                .with_member(MemberDescription::unknown("U1"))
                .with_member(MemberDescription::unknown("U2")),
            desc("C", &["Y"]),
        ];

        let results = registry.register_all(&descs);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().type_name(), "A");
        assert_eq!(results[1].as_ref().unwrap().table().len(), 2);
        assert!(results[2].is_err());
        assert_eq!(results[3].as_ref().unwrap().type_name(), "C");
        assert_eq!(registry.type_names().len(), 3);
    }

    #[test]
    fn test_build_all_parallel() {
        let descs: Vec<_> = (0..32).map(|i| desc(&format!("T{i}"), &["A", "B"])).collect();

        let results = build_all(&descs);

        assert_eq!(results.len(), 32);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.as_ref().unwrap().type_name(), format!("T{i}"));
        }
    }
}
