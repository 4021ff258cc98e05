use movemock_syntax::{
    AccessorBlock, AccessorDecl, AccessorKind, BinaryOperator, CodeBlock, Expr, MemberDecl,
    PatternBinding, Stmt, VariableDecl,
};

use crate::diagnostics::Diagnostic;
use crate::misc::StringEx;

/// Mock implementation of a property requirement.
///
/// Optional properties are stored properties of the mock. All others are
/// computed properties forwarding to an implicitly unwrapped
/// `underlying<Name>` property.
///
/// # Errors
///
/// Fails if the declaration has more than one binding or its pattern is not
/// a plain identifier.
pub fn variables_declarations(variable: &VariableDecl) -> Result<Vec<MemberDecl>, Diagnostic> {
    let binding = match variable.bindings.as_slice() {
        [binding] => binding,
        _ => return Err(Diagnostic::VariableDeclInProtocolWithNotSingleBinding),
    };

    let Some(name) = binding.name() else {
        return Err(Diagnostic::VariableDeclInProtocolWithNotIdentifierPattern);
    };

    if binding.is_optional_type() {
        return Ok(vec![variable.without_accessors().into()]);
    }

    let underlying = format!("underlying{}", name.capitalizing_first_letter());

    let getter = CodeBlock::new(vec![Stmt::Expr(Expr::reference(&underlying))]);
    let setter = CodeBlock::new(vec![Stmt::Expr(
        Expr::reference(&underlying).infix(BinaryOperator::Assign, Expr::reference("newValue")),
    )]);
    let accessors = AccessorBlock::Accessors(vec![
        AccessorDecl::new(AccessorKind::Get, Some(getter)),
        AccessorDecl::new(AccessorKind::Set, Some(setter)),
    ]);

    let mut property = PatternBinding::new(name).with_accessors(accessors);
    let mut storage = PatternBinding::new(underlying);

    if let Some(ty) = &binding.ty {
        property = property.with_type(ty.clone());
        storage = storage.with_type(ty.clone().parenthesized().implicitly_unwrapped());
    }

    Ok(vec![
        VariableDecl::var(property).into(),
        VariableDecl::var(storage).into(),
    ])
}
