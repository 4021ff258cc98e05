use movemock::factory::closure::{call_expression, variable_declaration};

use crate::function;

#[test]
fn without_parameters() {
    let function = function("func fetch()");

    assert_eq!(
        "var fetchClosure: (() -> Void)?",
        variable_declaration("fetch", &function.signature).to_string()
    );
    assert_eq!(
        "fetchClosure?()",
        call_expression("fetch", &function.signature).to_string()
    );
}

#[test]
fn parameters_lose_labels_and_attributes() {
    let function = function("func run(text: String, block: @escaping (Int) -> Void)");

    assert_eq!(
        "var runTextBlockClosure: ((String, (Int) -> Void) -> Void)?",
        variable_declaration("runTextBlock", &function.signature).to_string()
    );
    assert_eq!(
        "runTextBlockClosure?(text, block)",
        call_expression("runTextBlock", &function.signature).to_string()
    );
}

#[test]
fn async_with_return_type() {
    let function = function("func foo(text: String, count: Int) async -> Decimal");

    assert_eq!(
        "var fooTextCountClosure: ((String, Int) async -> Decimal)?",
        variable_declaration("fooTextCount", &function.signature).to_string()
    );
    assert_eq!(
        "await fooTextCountClosure!(text, count)",
        call_expression("fooTextCount", &function.signature).to_string()
    );
}

#[test]
fn async_throws() {
    let function = function("func fetchConfig() async throws -> [String: String]");

    assert_eq!(
        "var fetchConfigClosure: (() async throws -> [String: String])?",
        variable_declaration("fetchConfig", &function.signature).to_string()
    );
    assert_eq!(
        "try await fetchConfigClosure!()",
        call_expression("fetchConfig", &function.signature).to_string()
    );
}

#[test]
fn void_throws() {
    let function = function("func save(_ value: Int) throws");

    assert_eq!(
        "try saveClosure?(value)",
        call_expression("save", &function.signature).to_string()
    );
}

#[test]
fn rethrows_becomes_throws() {
    let function = function("func map(_ transform: (Int) throws -> Int) rethrows -> [Int]");

    assert_eq!(
        "var mapClosure: (((Int) throws -> Int) throws -> [Int])?",
        variable_declaration("map", &function.signature).to_string()
    );
}
