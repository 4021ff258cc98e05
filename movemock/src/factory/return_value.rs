use movemock_syntax::{Expr, PatternBinding, Stmt, TypeSyntax, VariableDecl};

/// Property holding the stubbed return value.
///
/// Optional return types are kept, everything else becomes implicitly
/// unwrapped. No initializer is emitted in both cases.
pub fn variable_declaration(prefix: &str, return_type: &TypeSyntax) -> VariableDecl {
    let ty = if return_type.is_optional() {
        return_type.clone()
    } else {
        return_type.clone().implicitly_unwrapped()
    };

    VariableDecl::var(PatternBinding::new(identifier(prefix)).with_type(ty))
}

/// `return <prefix>ReturnValue`
pub fn return_statement(prefix: &str) -> Stmt {
    Stmt::Return(Some(Expr::reference(identifier(prefix))))
}

pub(crate) fn identifier(prefix: &str) -> String {
    format!("{prefix}ReturnValue")
}
