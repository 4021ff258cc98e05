use movemock::factory::invoked_count::{increment_expression, variable_declaration};

#[test]
fn variable() {
    assert_eq!(
        "var functionNameInvokedCount = 0",
        variable_declaration("functionName").to_string()
    );
}

#[test]
fn increment() {
    assert_eq!(
        "function_nameInvokedCount += 1",
        increment_expression("function_name").to_string()
    );
}
