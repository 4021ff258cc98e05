use movemock_syntax::{Expr, Parameter, TupleTypeElement, TypeSyntax};

/// Helpers shared by the factories that record or forward the arguments of
/// a function requirement.
pub trait ParametersEx {
    /// The parameter if the list has exactly one.
    fn only(&self) -> Option<&Parameter>;

    /// `(name: T, other: U)` labelled by the internal names, attributes removed.
    fn labeled_tuple_type(&self) -> TypeSyntax;

    /// `(name, other)`
    fn tuple_expression(&self) -> Expr;

    /// One reference per parameter, in declaration order.
    fn argument_references(&self) -> Vec<Expr>;

    /// Unlabeled parameter types with attributes and specifiers removed.
    fn stripped_types(&self) -> Vec<TupleTypeElement>;
}

impl ParametersEx for [Parameter] {
    fn only(&self) -> Option<&Parameter> {
        match self {
            [parameter] => Some(parameter),
            _ => None,
        }
    }

    fn labeled_tuple_type(&self) -> TypeSyntax {
        TypeSyntax::Tuple(
            self.iter()
                .map(|p| TupleTypeElement::labeled(p.internal_name(), p.ty.without_attributes().clone()))
                .collect(),
        )
    }

    fn tuple_expression(&self) -> Expr {
        Expr::Tuple(self.argument_references())
    }

    fn argument_references(&self) -> Vec<Expr> {
        self.iter().map(|p| Expr::reference(p.internal_name())).collect()
    }

    fn stripped_types(&self) -> Vec<TupleTypeElement> {
        self.iter()
            .map(|p| TupleTypeElement::unlabeled(p.ty.without_attributes().clone()))
            .collect()
    }
}
