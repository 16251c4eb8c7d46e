//! Table construction scenarios, end to end through the public API.

use qname_enum::table::{build, check_enum, codes, EnumRegistry};
use qname_enum::{
    BaseTypeKind, EnumDescription, MemberDescription, QNameEnumType, QualifiedName,
    StructuralViolation, TableEntry, ValueOverride, WireType,
};
use rstest::rstest;

fn urn_x() -> EnumDescription {
    EnumDescription::new("com.acme.Letters").with_package_namespace("urn:x")
}

fn local(name: &str, local_part: &str) -> MemberDescription {
    MemberDescription::new(name).with_override(ValueOverride::default().with_local_part(local_part))
}

#[test]
fn test_scenario_override_and_exclusion() {
    let desc = urn_x()
        .with_member(MemberDescription::new("A"))
        .with_member(local("B", "bee"))
        .with_member(MemberDescription::new("C").with_override(ValueOverride::excluded()));

    let table = build(&desc).unwrap();
    let entries: Vec<_> = table.iter().collect();

    assert_eq!(
        entries,
        vec![
            ("A", &TableEntry::Resolved(QualifiedName::new("urn:x", "A"))),
            ("B", &TableEntry::Resolved(QualifiedName::new("urn:x", "bee"))),
        ]
    );
    assert!(!table.contains("C"), "excluded member must have no entry");
}

#[test]
fn test_scenario_unknown_marker() {
    let desc = urn_x()
        .with_member(MemberDescription::new("A"))
        .with_member(MemberDescription::unknown("UNKNOWN"));

    let table = build(&desc).unwrap();
    let entries: Vec<_> = table.iter().collect();

    assert_eq!(
        entries,
        vec![
            ("A", &TableEntry::Resolved(QualifiedName::new("urn:x", "A"))),
            ("UNKNOWN", &TableEntry::Unknown),
        ]
    );
    assert_eq!(table.unknown_marker(), Some("UNKNOWN"));
}

#[rstest]
#[case(None, Some("urn:pkg"), "urn:pkg")]
#[case(Some("urn:declared"), Some("urn:pkg"), "urn:declared")]
#[case(Some("urn:declared"), None, "urn:declared")]
#[case(None, None, "")]
fn test_namespace_fallback_chain(
    #[case] declared: Option<&str>,
    #[case] package: Option<&str>,
    #[case] expected: &str,
) {
    let mut desc = EnumDescription::new("T").with_member(MemberDescription::new("A"));
    desc.declared_namespace = declared.map(Into::into);
    desc.package_default_namespace = package.map(Into::into);

    let table = build(&desc).unwrap();
    assert_eq!(table.qualified_name("A"), Some(&QualifiedName::new(expected, "A")));
}

#[rstest]
#[case::same_local_part(local("B", "A"))]
#[case::same_namespace_override(
    MemberDescription::new("B").with_override(
        ValueOverride::default().with_namespace("urn:x").with_local_part("A")
    )
)]
fn test_duplicate_qualified_name_fails(#[case] colliding: MemberDescription) {
    let desc = urn_x()
        .with_member(MemberDescription::new("A"))
        .with_member(colliding)
        .with_member(MemberDescription::new("Z"));

    match build(&desc) {
        Err(StructuralViolation::DuplicateQualifiedName { qname, first, second, .. }) => {
            assert_eq!(qname, QualifiedName::new("urn:x", "A"));
            assert_eq!(&*first, "A");
            assert_eq!(&*second, "B");
        }
        other => panic!("expected duplicate qname violation, got {:?}", other),
    }
}

#[test]
fn test_same_local_part_different_namespace_is_fine() {
    let desc = urn_x().with_member(MemberDescription::new("A")).with_member(
        MemberDescription::new("B").with_override(
            ValueOverride::default().with_namespace("urn:y").with_local_part("A"),
        ),
    );

    let table = build(&desc).unwrap();
    assert_eq!(table.symbol_for(&QualifiedName::new("urn:x", "A")), Some("A"));
    assert_eq!(table.symbol_for(&QualifiedName::new("urn:y", "A")), Some("B"));
}

#[test]
fn test_duplicate_unknown_marker_fails() {
    let desc = urn_x()
        .with_member(MemberDescription::unknown("U1"))
        .with_member(MemberDescription::new("A"))
        .with_member(MemberDescription::unknown("U2"));

    let err = build(&desc).unwrap_err();
    assert!(matches!(err, StructuralViolation::DuplicateUnknownMarker { .. }));
    assert!(err.to_string().contains("com.acme.Letters"));
}

#[test]
fn test_build_is_idempotent() {
    let desc = urn_x()
        .with_member(MemberDescription::new("A"))
        .with_member(local("B", "bee"))
        .with_member(MemberDescription::unknown("UNKNOWN"));

    assert_eq!(build(&desc).unwrap(), build(&desc).unwrap());
}

#[test]
fn test_reverse_lookup_without_unknown_marker() {
    let desc = urn_x().with_member(MemberDescription::new("A"));
    let table = build(&desc).unwrap();

    assert_eq!(table.symbol_for(&QualifiedName::new("urn:x", "B")), None);
}

#[rstest]
#[case(BaseTypeKind::QName, WireType::QName)]
#[case(BaseTypeKind::Uri, WireType::AnyUri)]
fn test_type_model_wire_type(#[case] base: BaseTypeKind, #[case] expected: WireType) {
    let desc = urn_x().with_base_type(base).with_member(MemberDescription::new("A"));

    let model = QNameEnumType::new(&desc).unwrap();
    assert_eq!(model.wire_type(), expected);
    assert_eq!(model.namespace(), "urn:x");
}

#[test]
fn test_registry_shares_models_across_threads() {
    let registry = EnumRegistry::new();
    let desc = urn_x().with_member(MemberDescription::new("A"));

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                let model = registry.get_or_build(&desc).unwrap();
                assert_eq!(model.table().len(), 1);
            });
        }
    });

    assert_eq!(registry.len(), 1);
}

#[test]
fn test_checker_agrees_with_builder() {
    let desc = urn_x()
        .with_member(MemberDescription::new("A"))
        .with_member(local("B", "A"));

    let err = build(&desc).unwrap_err();
    let diagnostics = check_enum(&desc);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, codes::DUPLICATE_QUALIFIED_NAME);
    assert_eq!(diagnostics[0].code, err.code());
    assert_eq!(&*diagnostics[0].message, err.to_string());
}
