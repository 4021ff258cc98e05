use movemock_syntax::{BinaryOperator, Expr, PatternBinding, VariableDecl};

/// `var <prefix>InvokedCount = 0`
pub fn variable_declaration(prefix: &str) -> VariableDecl {
    VariableDecl::var(
        PatternBinding::new(identifier(prefix)).with_initializer(Expr::IntegerLiteral(0)),
    )
}

/// `<prefix>InvokedCount += 1`
pub fn increment_expression(prefix: &str) -> Expr {
    Expr::reference(identifier(prefix)).infix(BinaryOperator::AddAssign, Expr::IntegerLiteral(1))
}

pub(crate) fn identifier(prefix: &str) -> String {
    format!("{prefix}InvokedCount")
}
