use movemock::{class_declaration, Diagnostic};
use pretty_assertions::assert_eq;

use crate::protocol;

fn mock(source: &str) -> String {
    class_declaration(&protocol(source)).unwrap().to_string()
}

#[test]
fn empty_protocol() {
    let decl = class_declaration(&protocol("protocol Foo {}")).unwrap();

    assert!(decl.generic_parameters.is_none());
    assert!(decl.members.is_empty());
    assert_eq!("class FooMock: Foo {\n}", decl.to_string());
}

#[test]
fn function() {
    assert_eq!(
        "class ServiceMock: Service {
    var fetchInvokedCount = 0
    var fetchInvoked: Bool {
        return fetchInvokedCount > 0
    }
    var fetchClosure: (() -> Void)?
    func fetch() {
        fetchInvokedCount += 1
        fetchClosure?()
    }
}",
        mock(
            "protocol Service {
                func fetch()
            }"
        )
    );
}

#[test]
fn function_with_arguments() {
    assert_eq!(
        "class ViewModelProtocolMock: ViewModelProtocol {
    var fooTextCountInvokedCount = 0
    var fooTextCountInvoked: Bool {
        return fooTextCountInvokedCount > 0
    }
    var fooTextCountReceivedArguments: (text: String, count: Int)?
    var fooTextCountReceivedInvocations: [(text: String, count: Int)] = []
    var fooTextCountClosure: ((String, Int) -> Void)?
    func foo(text: String, count: Int) {
        fooTextCountInvokedCount += 1
        fooTextCountReceivedArguments = (text, count)
        fooTextCountReceivedInvocations.append((text, count))
        fooTextCountClosure?(text, count)
    }
}",
        mock(
            "protocol ViewModelProtocol {
                func foo(text: String, count: Int)
            }"
        )
    );
}

#[test]
fn function_with_return_value() {
    assert_eq!(
        "class BarMock: Bar {
    var printInvokedCount = 0
    var printInvoked: Bool {
        return printInvokedCount > 0
    }
    var printReturnValue: (text: String, tuple: (count: Int?, Date))!
    var printClosure: (() -> (text: String, tuple: (count: Int?, Date)))?
    func print() -> (text: String, tuple: (count: Int?, Date)) {
        printInvokedCount += 1
        if printClosure != nil {
            return printClosure!()
        } else {
            return printReturnValue
        }
    }
}",
        mock(
            "protocol Bar {
                func print() -> (text: String, tuple: (count: Int?, Date))
            }"
        )
    );
}

#[test]
fn async_function() {
    assert_eq!(
        "class ServiceProtocolMock: ServiceProtocol {
    var fooTextCountInvokedCount = 0
    var fooTextCountInvoked: Bool {
        return fooTextCountInvokedCount > 0
    }
    var fooTextCountReceivedArguments: (text: String, count: Int)?
    var fooTextCountReceivedInvocations: [(text: String, count: Int)] = []
    var fooTextCountReturnValue: Decimal!
    var fooTextCountClosure: ((String, Int) async -> Decimal)?
    func foo(text: String, count: Int) async -> Decimal {
        fooTextCountInvokedCount += 1
        fooTextCountReceivedArguments = (text, count)
        fooTextCountReceivedInvocations.append((text, count))
        if fooTextCountClosure != nil {
            return await fooTextCountClosure!(text, count)
        } else {
            return fooTextCountReturnValue
        }
    }
}",
        mock(
            "protocol ServiceProtocol {
                func foo(text: String, count: Int) async -> Decimal
            }"
        )
    );
}

#[test]
fn throwing_function() {
    assert_eq!(
        "class ServiceProtocolMock: ServiceProtocol {
    var fooInvokedCount = 0
    var fooInvoked: Bool {
        return fooInvokedCount > 0
    }
    var fooReceivedAdded: ((text: String) -> Void)?
    var fooReceivedInvocations: [((text: String) -> Void)?] = []
    var fooThrowableError: Error?
    var fooReturnValue: (() -> Int)?
    var fooClosure: ((((text: String) -> Void)?) throws -> (() -> Int)?)?
    func foo(_ added: ((text: String) -> Void)?) throws -> (() -> Int)? {
        fooInvokedCount += 1
        fooReceivedAdded = (added)
        fooReceivedInvocations.append((added))
        if let fooThrowableError {
            throw fooThrowableError
        }
        if fooClosure != nil {
            return try fooClosure!(added)
        } else {
            return fooReturnValue
        }
    }
}",
        mock(
            "protocol ServiceProtocol {
                func foo(_ added: ((text: String) -> Void)?) throws -> (() -> Int)?
            }"
        )
    );
}

#[test]
fn variable() {
    assert_eq!(
        "class ServiceProtocolMock: ServiceProtocol {
    var data: Data {
        get {
            underlyingData
        }
        set {
            underlyingData = newValue
        }
    }
    var underlyingData: (Data)!
}",
        mock(
            "protocol ServiceProtocol {
                var data: Data { get }
            }"
        )
    );
}

#[test]
fn optional_variable() {
    assert_eq!(
        "class ServiceProtocolMock: ServiceProtocol {
    var data: Data?
}",
        mock(
            "protocol ServiceProtocol {
                var data: Data? { get set }
            }"
        )
    );
}

#[test]
fn closure_variable() {
    assert_eq!(
        "class ServiceProtocolMock: ServiceProtocol {
    var completion: () -> Void {
        get {
            underlyingCompletion
        }
        set {
            underlyingCompletion = newValue
        }
    }
    var underlyingCompletion: (() -> Void)!
}",
        mock(
            "protocol ServiceProtocol {
                var completion: () -> Void { get set }
            }"
        )
    );
}

#[test]
fn associated_type() {
    assert_eq!(
        "class FooMock<Key: Hashable>: Foo {\n}",
        mock(
            "protocol Foo {
                associatedtype Key: Hashable
            }"
        )
    );
}

#[test]
fn associated_types_key_value() {
    assert_eq!(
        "class FooMock<Key: Hashable, Value>: Foo {\n}",
        mock(
            "protocol Foo {
                associatedtype Key: Hashable
                associatedtype Value
            }"
        )
    );
}

#[test]
fn variables_come_before_functions() {
    let decl = class_declaration(&protocol(
        "protocol Store {
            func reset()
            var count: Int? { get }
        }",
    ))
    .unwrap();

    assert_eq!("var count: Int?", decl.members[0].to_string());
    assert_eq!("var resetInvokedCount = 0", decl.members[1].to_string());
}

#[test]
fn deterministic() {
    let protocol = protocol(
        "protocol Service {
            var name: String { get }
            func fetch(id: Int) async throws -> String
        }",
    );

    let a = class_declaration(&protocol).unwrap().to_string();
    let b = class_declaration(&protocol).unwrap().to_string();

    assert_eq!(a, b);
}

#[test]
fn invalid_variable_fails() {
    let err = class_declaration(&protocol(
        "protocol Service {
            func fetch()
            var a: Int, b: Int
        }",
    ))
    .unwrap_err();

    assert_eq!(Diagnostic::VariableDeclInProtocolWithNotSingleBinding, err);
}
