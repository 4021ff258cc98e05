use movemock::factory::throwable_error::{throw_error_statement, variable_declaration};
use pretty_assertions::assert_eq;

#[test]
fn variable() {
    assert_eq!(
        "var functionNameThrowableError: Error?",
        variable_declaration("functionName").to_string()
    );
}

#[test]
fn throw_error() {
    assert_eq!(
        "if let function_nameThrowableError {
    throw function_nameThrowableError
}",
        throw_error_statement("function_name").to_string()
    );
}
