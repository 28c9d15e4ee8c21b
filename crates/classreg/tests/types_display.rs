//! Tests for Display implementations of model types

use classreg::prelude::*;

#[test]
fn test_visibility_display() {
    assert_eq!(Visibility::Public.to_string(), "public");
    assert_eq!(Visibility::Private.to_string(), "private");
    assert_eq!(Visibility::Protected.to_string(), "protected");
    assert_eq!(Visibility::Package.to_string(), "package");
}

#[test]
fn test_relationship_kind_display() {
    assert_eq!(RelationshipKind::Association.to_string(), "association");
    assert_eq!(RelationshipKind::Aggregation.to_string(), "aggregation");
    assert_eq!(RelationshipKind::Composition.to_string(), "composition");
    assert_eq!(RelationshipKind::Inheritance.to_string(), "inheritance");
    assert_eq!(RelationshipKind::Realization.to_string(), "realization");
    assert_eq!(RelationshipKind::Dependency.to_string(), "dependency");
    assert_eq!(
        RelationshipKind::Other("Uses".to_string()).to_string(),
        "Uses"
    );
}

#[test]
fn test_parameter_display() {
    assert_eq!(Parameter::new("id", "u64").to_string(), "id: u64");
}

#[test]
fn test_attribute_display_sigils() {
    let cases = [
        (Visibility::Public, "+id: u64"),
        (Visibility::Private, "-id: u64"),
        (Visibility::Protected, "#id: u64"),
        (Visibility::Package, "~id: u64"),
    ];
    for (visibility, expected) in cases {
        let attr = Attribute::new("id", "u64").with_visibility(visibility);
        assert_eq!(attr.to_string(), expected);
    }
}

#[test]
fn test_static_marker_follows_type() {
    let attr = Attribute::new("count", "usize").with_static(true);
    assert_eq!(attr.to_string(), "+count: usize$");

    let attr = Attribute::new("offset", "int")
        .with_visibility(Visibility::Private)
        .with_static(true)
        .with_default("-1");
    assert_eq!(attr.to_string(), "-offset: int$ = -1");
}

#[test]
fn test_static_abstract_method_display() {
    let method = Method::new("create", "Self")
        .with_static(true)
        .with_abstract(true)
        .with_parameter(Parameter::new("name", "String"));
    assert_eq!(method.to_string(), "+create(name: String): Self*$");
}
