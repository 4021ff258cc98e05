use movemock_syntax::{ClassDecl, FunctionDecl, MemberDecl, ProtocolDecl, TypeSyntax};
use tracing::{debug, trace};

use crate::diagnostics::Diagnostic;

use super::{
    associatedtype, closure, function_implementation, invoked, invoked_count, received_arguments,
    received_invocations, return_value, throwable_error, variable_prefix, variables_implementation,
};

/// Build the mock class `<Name>Mock` for `protocol`.
///
/// Properties come first (in protocol order), followed by the bookkeeping
/// properties and the implementation of each function.
///
/// # Errors
///
/// Fails if one of the property requirements cannot be mocked, see
/// [`variables_implementation::variables_declarations`].
pub fn class_declaration(protocol: &ProtocolDecl) -> Result<ClassDecl, Diagnostic> {
    let associated_types = protocol.associated_types().collect::<Vec<_>>();
    let variables = protocol.variables().collect::<Vec<_>>();
    let functions = protocol.functions().collect::<Vec<_>>();

    let mut members = Vec::new();

    for variable in &variables {
        members.extend(variables_implementation::variables_declarations(variable)?);
    }

    for function in &functions {
        function_members(&mut members, function);
    }

    let mock = ClassDecl {
        attributes: Vec::new(),
        modifiers: Vec::new(),
        name: format!("{}Mock", protocol.name),
        generic_parameters: associatedtype::generic_parameter_clause(&associated_types),
        inheritance: vec![TypeSyntax::identifier(&protocol.name)],
        members,
    };

    debug!(
        protocol = %protocol.name,
        associated_types = associated_types.len(),
        variables = variables.len(),
        functions = functions.len(),
        "synthesized {}",
        mock.name
    );

    Ok(mock)
}

fn function_members(members: &mut Vec<MemberDecl>, function: &FunctionDecl) {
    let prefix = variable_prefix::text(function);
    let signature = &function.signature;
    let parameters = &signature.parameters;

    trace!(function = %function.name, %prefix, "mock function");

    members.push(invoked_count::variable_declaration(&prefix).into());
    members.push(invoked::variable_declaration(&prefix).into());

    if !parameters.is_empty() {
        members.push(received_arguments::variable_declaration(&prefix, parameters).into());
        members.push(received_invocations::variable_declaration(&prefix, parameters).into());
    }

    if signature.effects.is_throwing() {
        members.push(throwable_error::variable_declaration(&prefix).into());
    }

    if let Some(return_type) = &signature.return_type {
        members.push(return_value::variable_declaration(&prefix, return_type).into());
    }

    members.push(closure::variable_declaration(&prefix, signature).into());
    members.push(function_implementation::declaration(&prefix, function).into());
}
