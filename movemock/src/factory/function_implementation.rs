use movemock_syntax::{BinaryOperator, CodeBlock, Condition, Expr, FunctionDecl, IfStmt, Stmt};

use super::{
    closure, invoked_count, received_arguments, received_invocations, return_value,
    throwable_error,
};

/// Implementation of a function requirement inside the mock.
///
/// The requirement is copied without its `mutating` modifier (the mock is a
/// class) and gets a body that records the call and then either throws the
/// stubbed error, calls the stubbed closure or returns the stubbed value.
pub fn declaration(prefix: &str, function: &FunctionDecl) -> FunctionDecl {
    let signature = &function.signature;
    let parameters = &signature.parameters;

    let mut statements = vec![Stmt::Expr(invoked_count::increment_expression(prefix))];

    if !parameters.is_empty() {
        statements.push(received_arguments::assign_value_expression(prefix, parameters).into());
        statements.push(received_invocations::append_value_expression(prefix, parameters).into());
    }

    if signature.effects.is_throwing() {
        statements.push(throwable_error::throw_error_statement(prefix));
    }

    if signature.return_type.is_some() {
        statements.push(return_statement(prefix, function).into());
    } else {
        statements.push(closure::call_expression(prefix, signature).into());
    }

    FunctionDecl {
        modifiers: function
            .modifiers
            .iter()
            .filter(|m| m.name != "mutating")
            .cloned()
            .collect(),
        body: Some(CodeBlock::new(statements)),
        ..function.clone()
    }
}

/// `if <p>Closure != nil { return <p>Closure!(...) } else { return <p>ReturnValue }`
fn return_statement(prefix: &str, function: &FunctionDecl) -> IfStmt {
    let condition = Expr::reference(closure::identifier(prefix))
        .infix(BinaryOperator::NotEqual, Expr::NilLiteral);
    let call = closure::call_expression(prefix, &function.signature);

    IfStmt {
        conditions: vec![Condition::Expr(condition)],
        body: CodeBlock::new(vec![Stmt::Return(Some(call))]),
        else_body: Some(CodeBlock::new(vec![return_value::return_statement(prefix)])),
    }
}
