use movemock_syntax::{Decl, DeclKind, SourceFile, SourceLocation};

fn summary(file: &SourceFile) -> Vec<(usize, usize, String)> {
    file.items
        .iter()
        .map(|item| {
            let name = match &item.decl {
                Decl::Protocol(protocol) => format!("protocol {}", protocol.name),
                Decl::Other(other) => format!("{:?} {}", other.kind, other.name),
                decl => format!("{decl:?}"),
            };

            (item.location.line, item.location.column, name)
        })
        .collect()
}

#[test]
fn interpolation_in_unrelated_declaration() {
    let file = r#"import Foundation

struct Greeter {
    let name: String

    func greet() -> String { "Hello \(name)" }
}

@Mock
protocol Service { func fetch() }
"#
    .parse::<SourceFile>()
    .unwrap();

    assert_eq!(
        vec![
            (1, 0, "Import Foundation".to_owned()),
            (3, 0, "Struct Greeter".to_owned()),
            (9, 0, "protocol Service".to_owned()),
        ],
        summary(&file)
    );
}

#[test]
fn declarations_on_one_line() {
    let file = r#"@Mock protocol Service { func fetch() }  struct Greeter { let name: String; func greet() -> String { "Hello \(name)" } }"#
        .parse::<SourceFile>()
        .unwrap();

    assert_eq!(
        vec![
            (1, 0, "protocol Service".to_owned()),
            (1, 41, "Struct Greeter".to_owned()),
        ],
        summary(&file)
    );
}

#[test]
fn backtick_identifier() {
    let file = "func `default`() {}\n\n@Mock protocol Foo {}"
        .parse::<SourceFile>()
        .unwrap();

    assert!(matches!(
        &file.items[0].decl,
        Decl::Other(other) if other.kind == DeclKind::Function && other.name == "default"
    ));
    assert_eq!(Some("default"), file.items[0].decl.name());
    assert_eq!(Some("Foo"), file.items[1].decl.name());
    assert_eq!(SourceLocation { line: 3, column: 0 }, file.items[1].location);
}

#[test]
fn unreadable_declarations_are_skipped() {
    let file = r##"let pattern = #"\d+"#
typealias Handler = (String) -> Void

@Mock
protocol Foo {}
"##
    .parse::<SourceFile>()
    .unwrap();

    assert_eq!(vec![(4, 0, "protocol Foo".to_owned())], summary(&file));
}

#[test]
fn annotated_declaration_must_parse() {
    assert!("struct A { let a = \"\\(b)\" }\n@Mock protocol Foo { func `default`() }"
        .parse::<SourceFile>()
        .is_err());
}
