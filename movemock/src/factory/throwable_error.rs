use movemock_syntax::{
    CodeBlock, Condition, Expr, IfStmt, PatternBinding, Stmt, TypeSyntax, VariableDecl,
};

/// `var <prefix>ThrowableError: Error?`
pub fn variable_declaration(prefix: &str) -> VariableDecl {
    VariableDecl::var(
        PatternBinding::new(identifier(prefix))
            .with_type(TypeSyntax::identifier("Error").optional()),
    )
}

/// `if let <prefix>ThrowableError { throw <prefix>ThrowableError }`
pub fn throw_error_statement(prefix: &str) -> Stmt {
    let identifier = identifier(prefix);

    Stmt::If(IfStmt {
        conditions: vec![Condition::OptionalBinding {
            name: identifier.clone(),
            value: None,
        }],
        body: CodeBlock::new(vec![Stmt::Throw(Expr::reference(identifier))]),
        else_body: None,
    })
}

fn identifier(prefix: &str) -> String {
    format!("{prefix}ThrowableError")
}
