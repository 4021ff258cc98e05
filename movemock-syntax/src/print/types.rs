use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::attribute::{Attribute, AttributeArgument, AttributeValue, Modifier};
use crate::types::{EffectSpecifiers, FunctionType, TupleTypeElement, TypeSyntax};

use super::write_separated;

impl Display for TypeSyntax {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Identifier(ty) => {
                f.write_str(&ty.name)?;
                write_generic_arguments(f, &ty.generic_arguments)
            }
            Self::Member(ty) => {
                write!(f, "{}.{}", ty.base, ty.name)?;
                write_generic_arguments(f, &ty.generic_arguments)
            }
            Self::Optional(wrapped) => write_wrapped(f, wrapped, '?'),
            Self::ImplicitlyUnwrappedOptional(wrapped) => write_wrapped(f, wrapped, '!'),
            Self::Array(element) => write!(f, "[{element}]"),
            Self::Dictionary { key, value } => write!(f, "[{key}: {value}]"),
            Self::Tuple(elements) => {
                f.write_str("(")?;
                write_separated(f, elements, ", ")?;
                f.write_str(")")
            }
            Self::Function(ty) => ty.fmt(f),
            Self::Attributed(ty) => {
                if let Some(specifier) = &ty.specifier {
                    write!(f, "{specifier} ")?;
                }

                for attribute in &ty.attributes {
                    write!(f, "{attribute} ")?;
                }

                ty.base.fmt(f)
            }
            Self::Constrained {
                specifier,
                constraint,
            } => write!(f, "{} {constraint}", specifier.as_str()),
            Self::Composition(types) => write_separated(f, types, " & "),
        }
    }
}

fn write_wrapped(f: &mut Formatter<'_>, wrapped: &TypeSyntax, suffix: char) -> FmtResult {
    if wrapped.needs_parentheses_when_wrapped() {
        write!(f, "({wrapped}){suffix}")
    } else {
        write!(f, "{wrapped}{suffix}")
    }
}

fn write_generic_arguments(f: &mut Formatter<'_>, arguments: &[TypeSyntax]) -> FmtResult {
    if arguments.is_empty() {
        return Ok(());
    }

    f.write_str("<")?;
    write_separated(f, arguments, ", ")?;
    f.write_str(">")
}

impl Display for TupleTypeElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (&self.first_name, &self.second_name) {
            (Some(first), Some(second)) => write!(f, "{first} {second}: {}", self.ty),
            (Some(first), None) => write!(f, "{first}: {}", self.ty),
            _ => self.ty.fmt(f),
        }
    }
}

impl Display for FunctionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("(")?;
        write_separated(f, &self.parameters, ", ")?;
        f.write_str(")")?;
        self.effects.fmt(f)?;

        write!(f, " -> {}", self.return_type)
    }
}

/// Writes ` async throws` including the leading space, or nothing.
impl Display for EffectSpecifiers {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_async {
            f.write_str(" async")?;
        }

        if let Some(throws) = &self.throws {
            write!(f, " {}", throws.as_str())?;
        }

        Ok(())
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "@{}", self.name)?;

        if let Some(arguments) = &self.arguments {
            f.write_str("(")?;
            write_separated(f, arguments, ", ")?;
            f.write_str(")")?;
        }

        Ok(())
    }
}

impl Display for AttributeArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(label) = &self.label {
            write!(f, "{label}: ")?;
        }

        match &self.value {
            AttributeValue::String(s) => write!(f, "{s:?}"),
            AttributeValue::Verbatim(s) => f.write_str(s),
        }
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.name)?;

        if let Some(detail) = &self.detail {
            write!(f, "({detail})")?;
        }

        Ok(())
    }
}
