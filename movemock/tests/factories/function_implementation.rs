use movemock::factory::function_implementation::declaration;
use pretty_assertions::assert_eq;

use crate::function;

#[test]
fn without_parameters() {
    let decl = declaration("functionName", &function("func foo()"));

    assert_eq!(
        "func foo() {
    functionNameInvokedCount += 1
    functionNameClosure?()
}",
        decl.to_string()
    );
}

#[test]
fn arguments() {
    let decl = declaration("func_name", &function("func foo(text: String, count: Int)"));

    assert_eq!(
        "func foo(text: String, count: Int) {
    func_nameInvokedCount += 1
    func_nameReceivedArguments = (text, count)
    func_nameReceivedInvocations.append((text, count))
    func_nameClosure?(text, count)
}",
        decl.to_string()
    );
}

#[test]
fn return_value() {
    let decl = declaration(
        "funcName",
        &function("func foo() -> (text: String, tuple: (count: Int?, Date))"),
    );

    assert_eq!(
        "func foo() -> (text: String, tuple: (count: Int?, Date)) {
    funcNameInvokedCount += 1
    if funcNameClosure != nil {
        return funcNameClosure!()
    } else {
        return funcNameReturnValue
    }
}",
        decl.to_string()
    );
}

#[test]
fn return_value_async_throws() {
    let decl = declaration(
        "foo",
        &function(
            "func foo(_ bar: String) async throws -> (text: String, tuple: (count: Int?, Date))",
        ),
    );

    assert_eq!(
        "func foo(_ bar: String) async throws -> (text: String, tuple: (count: Int?, Date)) {
    fooInvokedCount += 1
    fooReceivedBar = (bar)
    fooReceivedInvocations.append((bar))
    if let fooThrowableError {
        throw fooThrowableError
    }
    if fooClosure != nil {
        return try await fooClosure!(bar)
    } else {
        return fooReturnValue
    }
}",
        decl.to_string()
    );
}

#[test]
fn mutating_is_removed() {
    let decl = declaration("functionName", &function("mutating func foo()"));

    assert!(decl.modifiers.is_empty());
    assert_eq!(
        "func foo() {
    functionNameInvokedCount += 1
    functionNameClosure?()
}",
        decl.to_string()
    );
}

#[test]
fn other_modifiers_and_attributes_are_kept() {
    let decl = declaration(
        "update",
        &function("@MainActor nonisolated mutating func update() async"),
    );

    assert_eq!(
        "@MainActor nonisolated func update() async {
    updateInvokedCount += 1
    await updateClosure?()
}",
        decl.to_string()
    );
}

#[test]
fn generics_are_kept() {
    let decl = declaration(
        "decodeFrom",
        &function("func decode<T: Decodable>(from data: Data) throws -> T where T: Sendable"),
    );

    assert_eq!(
        "func decode<T: Decodable>(from data: Data) throws -> T where T: Sendable {
    decodeFromInvokedCount += 1
    decodeFromReceivedData = (data)
    decodeFromReceivedInvocations.append((data))
    if let decodeFromThrowableError {
        throw decodeFromThrowableError
    }
    if decodeFromClosure != nil {
        return try decodeFromClosure!(data)
    } else {
        return decodeFromReturnValue
    }
}",
        decl.to_string()
    );
}

#[test]
fn throwing_without_return_value() {
    let decl = declaration("save", &function("func save(_ text: String) throws"));

    assert_eq!(
        "func save(_ text: String) throws {
    saveInvokedCount += 1
    saveReceivedText = (text)
    saveReceivedInvocations.append((text))
    if let saveThrowableError {
        throw saveThrowableError
    }
    try saveClosure?(text)
}",
        decl.to_string()
    );
}
