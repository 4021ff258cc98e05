use movemock_syntax::{
    EffectSpecifiers, Expr, FunctionSignature, FunctionType, PatternBinding, ThrowsSpecifier,
    TypeSyntax, VariableDecl,
};

use crate::misc::ParametersEx;

/// `var <prefix>Closure: ((P1, P2) async throws -> R)?`
///
/// The closure mirrors the signature of the function: labels are dropped,
/// parameter attributes removed, `rethrows` becomes `throws` and a missing
/// return type becomes `Void`.
pub fn variable_declaration(prefix: &str, signature: &FunctionSignature) -> VariableDecl {
    let effects = EffectSpecifiers {
        is_async: signature.effects.is_async,
        throws: signature
            .effects
            .is_throwing()
            .then_some(ThrowsSpecifier::Throws),
    };

    let return_type = signature
        .return_type
        .clone()
        .unwrap_or_else(|| TypeSyntax::identifier("Void"));

    let ty = TypeSyntax::Function(FunctionType {
        parameters: signature.parameters.stripped_types(),
        effects,
        return_type: Box::new(return_type),
    });

    VariableDecl::var(
        PatternBinding::new(identifier(prefix)).with_type(ty.parenthesized().optional()),
    )
}

/// Call of the closure with all arguments of the function.
///
/// Void functions call through optional chaining, functions with a return
/// type force unwrap the closure.
pub fn call_expression(prefix: &str, signature: &FunctionSignature) -> Expr {
    let callee = Expr::reference(identifier(prefix));
    let callee = if signature.return_type.is_some() {
        callee.force_unwrapped()
    } else {
        callee.optional_chained()
    };

    let mut expr = callee.call(signature.parameters.argument_references());

    if signature.effects.is_async {
        expr = expr.awaited();
    }

    if signature.effects.is_throwing() {
        expr = expr.tried();
    }

    expr
}

pub(crate) fn identifier(prefix: &str) -> String {
    format!("{prefix}Closure")
}
