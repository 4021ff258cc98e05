use movemock_syntax::{AssociatedTypeDecl, GenericParameter, GenericParameterClause};

/// Turn the associated types of a protocol into the generic parameters of
/// its mock. Only the first inherited type of each associated type is kept.
pub fn generic_parameter_clause(
    associated_types: &[&AssociatedTypeDecl],
) -> Option<GenericParameterClause> {
    if associated_types.is_empty() {
        return None;
    }

    let parameters = associated_types
        .iter()
        .map(|decl| GenericParameter {
            name: decl.name.clone(),
            inherited_type: decl.inheritance.first().cloned(),
        })
        .collect();

    Some(GenericParameterClause { parameters })
}
