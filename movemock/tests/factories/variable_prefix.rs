use movemock::factory::variable_prefix::text;

use crate::function;

#[test]
fn without_parameters() {
    assert_eq!("fetch", text(&function("func fetch()")));
}

#[test]
fn labels_are_capitalized() {
    assert_eq!(
        "fooTextCount",
        text(&function("func foo(text: String, count: Int)"))
    );
}

#[test]
fn wildcard_labels_are_skipped() {
    assert_eq!(
        "fetchData",
        text(&function("func fetchData(_ name: (String, count: Int)) async"))
    );
    assert_eq!(
        "updateWith",
        text(&function("func update(_ value: Int, with other: Int)"))
    );
}

#[test]
fn external_label_is_used() {
    assert_eq!(
        "loadFrom",
        text(&function("func load(from url: URL) throws -> Data"))
    );
}

#[test]
fn colliding_prefixes_are_not_disambiguated() {
    let a = text(&function("func foo(_ a: Int)"));
    let b = text(&function("func foo(_ b: String)"));

    assert_eq!(a, b);
}
