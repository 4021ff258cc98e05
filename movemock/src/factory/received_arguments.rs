use movemock_syntax::{BinaryOperator, Expr, Parameter, PatternBinding, TypeSyntax, VariableDecl};

use crate::misc::{ParametersEx, StringEx};

/// Property that stores the arguments of the last call.
///
/// A single parameter is stored by its own type (made optional), multiple
/// parameters as an optional tuple labelled with the parameter names.
/// `parameters` must not be empty.
pub fn variable_declaration(prefix: &str, parameters: &[Parameter]) -> VariableDecl {
    VariableDecl::var(
        PatternBinding::new(identifier(prefix, parameters)).with_type(variable_type(parameters)),
    )
}

/// `<identifier> = (a, b)`
pub fn assign_value_expression(prefix: &str, parameters: &[Parameter]) -> Expr {
    Expr::reference(identifier(prefix, parameters))
        .infix(BinaryOperator::Assign, parameters.tuple_expression())
}

fn variable_type(parameters: &[Parameter]) -> TypeSyntax {
    let Some(parameter) = parameters.only() else {
        return parameters.labeled_tuple_type().optional();
    };

    let ty = parameter.ty.without_attributes();
    match ty {
        TypeSyntax::Optional(_) => ty.clone(),
        TypeSyntax::Function(_) => ty.clone().parenthesized().optional(),
        _ => ty.clone().optional(),
    }
}

fn identifier(prefix: &str, parameters: &[Parameter]) -> String {
    match parameters.only() {
        Some(parameter) => format!(
            "{prefix}Received{}",
            parameter.internal_name().capitalizing_first_letter()
        ),
        None => format!("{prefix}ReceivedArguments"),
    }
}
