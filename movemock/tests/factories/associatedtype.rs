use movemock::factory::associatedtype::generic_parameter_clause;

use crate::protocol;

#[test]
fn empty() {
    assert!(generic_parameter_clause(&[]).is_none());
}

#[test]
fn single() {
    let protocol = protocol("protocol Foo { associatedtype Key: Hashable }");
    let associated_types = protocol.associated_types().collect::<Vec<_>>();

    let clause = generic_parameter_clause(&associated_types).unwrap();

    assert_eq!("<Key: Hashable>", clause.to_string());
}

#[test]
fn key_value() {
    let protocol = protocol(
        "protocol Foo {
            associatedtype Key: Hashable
            associatedtype Value
        }",
    );
    let associated_types = protocol.associated_types().collect::<Vec<_>>();

    let clause = generic_parameter_clause(&associated_types).unwrap();

    assert_eq!(2, clause.parameters.len());
    assert_eq!("<Key: Hashable, Value>", clause.to_string());
}

#[test]
fn only_first_inherited_type_is_kept() {
    let protocol = protocol("protocol Foo { associatedtype Key: Hashable, Codable = String }");
    let associated_types = protocol.associated_types().collect::<Vec<_>>();

    let clause = generic_parameter_clause(&associated_types).unwrap();

    assert_eq!("<Key: Hashable>", clause.to_string());
}
