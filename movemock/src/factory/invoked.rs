use movemock_syntax::{
    AccessorBlock, BinaryOperator, CodeBlock, Expr, PatternBinding, Stmt, TypeSyntax, VariableDecl,
};

use super::invoked_count;

/// `var <prefix>Invoked: Bool { return <prefix>InvokedCount > 0 }`
pub fn variable_declaration(prefix: &str) -> VariableDecl {
    let getter = CodeBlock::new(vec![Stmt::Return(Some(
        Expr::reference(invoked_count::identifier(prefix))
            .infix(BinaryOperator::Greater, Expr::IntegerLiteral(0)),
    ))]);

    VariableDecl::var(
        PatternBinding::new(format!("{prefix}Invoked"))
            .with_type(TypeSyntax::identifier("Bool"))
            .with_accessors(AccessorBlock::Getter(getter)),
    )
}
