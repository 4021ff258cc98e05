use movemock_syntax::{Expr, Parameter, PatternBinding, VariableDecl};

use crate::misc::ParametersEx;

/// `var <prefix>ReceivedInvocations: [E] = []`
///
/// `E` is the type of the only parameter, or the labelled tuple of all
/// parameters. `parameters` must not be empty.
pub fn variable_declaration(prefix: &str, parameters: &[Parameter]) -> VariableDecl {
    let element = match parameters.only() {
        Some(parameter) => parameter.ty.without_attributes().clone(),
        None => parameters.labeled_tuple_type(),
    };

    VariableDecl::var(
        PatternBinding::new(identifier(prefix))
            .with_type(element.array())
            .with_initializer(Expr::ArrayLiteral(Vec::new())),
    )
}

/// `<prefix>ReceivedInvocations.append((a, b))`
pub fn append_value_expression(prefix: &str, parameters: &[Parameter]) -> Expr {
    Expr::reference(identifier(prefix))
        .member("append")
        .call(vec![parameters.tuple_expression()])
}

fn identifier(prefix: &str) -> String {
    format!("{prefix}ReceivedInvocations")
}
