use movemock_syntax::{FunctionDecl, MemberDecl, ProtocolDecl, TypeSyntax};
use quote::quote;
use syn::parse2;

#[test]
fn protocol_from_tokens() {
    let protocol = parse2::<ProtocolDecl>(quote! {
        protocol Service {
            associatedtype Item
            var items: [Item] { get }
            func fetch(id: Int) async throws -> Item?
            func reset(_ all: Bool)
        }
    })
    .unwrap();

    assert_eq!("Service", protocol.name);
    assert!(matches!(
        protocol.members.as_slice(),
        [
            MemberDecl::AssociatedType(_),
            MemberDecl::Variable(_),
            MemberDecl::Function(_),
            MemberDecl::Function(_),
        ]
    ));
}

#[test]
fn type_from_tokens() {
    let ty = parse2::<TypeSyntax>(quote!((text: String, count: Int) -> [String: Int])).unwrap();

    assert!(ty.is_function());
    assert_eq!("(text: String, count: Int) -> [String: Int]", ty.to_string());
}

#[test]
fn escaping_parameter_from_tokens() {
    let function = parse2::<FunctionDecl>(quote! {
        func run(_ completion: @escaping (Int) -> Void, handler: @Sendable @MainActor () -> Void)
    })
    .unwrap();

    let parameters = &function.signature.parameters;
    assert_eq!(2, parameters.len());

    let TypeSyntax::Attributed(completion) = &parameters[0].ty else {
        panic!("Expected attributed type");
    };
    assert_eq!("escaping", completion.attributes[0].name);
    assert!(completion.attributes[0].arguments.is_none());
    assert!(completion.base.is_function());

    assert_eq!(
        "@Sendable @MainActor () -> Void",
        parameters[1].ty.to_string()
    );
}
