//! The [`types`](self) module contains the syntax tree of Swift types.

use crate::attribute::Attribute;

/// A Swift type as it is written in a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeSyntax {
    /// `Int`, `Array<Int>`, `Self`
    Identifier(IdentifierType),

    /// `Foo.Bar`, `T.Type`
    Member(MemberType),

    /// `T?`
    Optional(Box<TypeSyntax>),

    /// `T!`
    ImplicitlyUnwrappedOptional(Box<TypeSyntax>),

    /// `[T]`
    Array(Box<TypeSyntax>),

    /// `[K: V]`
    Dictionary {
        key: Box<TypeSyntax>,
        value: Box<TypeSyntax>,
    },

    /// `(label: T, U)`, also a single parenthesized type `(T)`.
    Tuple(Vec<TupleTypeElement>),

    /// `(T, U) async throws -> R`
    Function(FunctionType),

    /// `@escaping T`, `inout T`
    Attributed(AttributedType),

    /// `some P`, `any P`
    Constrained {
        specifier: ConstraintSpecifier,
        constraint: Box<TypeSyntax>,
    },

    /// `P & Q`
    Composition(Vec<TypeSyntax>),
}

impl TypeSyntax {
    /// Create a plain identifier type without generic arguments.
    pub fn identifier<S: Into<String>>(name: S) -> Self {
        Self::Identifier(IdentifierType {
            name: name.into(),
            generic_arguments: Vec::new(),
        })
    }

    /// Wrap this type into `Self?`.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Wrap this type into `Self!`.
    #[must_use]
    pub fn implicitly_unwrapped(self) -> Self {
        Self::ImplicitlyUnwrappedOptional(Box::new(self))
    }

    /// Wrap this type into a one-element tuple `(Self)`.
    #[must_use]
    pub fn parenthesized(self) -> Self {
        Self::Tuple(vec![TupleTypeElement::unlabeled(self)])
    }

    /// Wrap this type into an array `[Self]`.
    #[must_use]
    pub fn array(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Returns `true` if this is an optional type `T?`.
    ///
    /// Implicitly unwrapped optionals are not considered optional here.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Returns `true` if this is a function type.
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns the type without its attributes and specifiers (`@escaping`, `inout`).
    pub fn without_attributes(&self) -> &TypeSyntax {
        match self {
            Self::Attributed(attributed) => &attributed.base,
            ty => ty,
        }
    }

    pub(crate) fn needs_parentheses_when_wrapped(&self) -> bool {
        matches!(
            self,
            Self::Function(_) | Self::Attributed(_) | Self::Constrained { .. } | Self::Composition(_)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdentifierType {
    pub name: String,
    pub generic_arguments: Vec<TypeSyntax>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberType {
    pub base: Box<TypeSyntax>,
    pub name: String,
    pub generic_arguments: Vec<TypeSyntax>,
}

/// Element of a tuple type or parameter of a function type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TupleTypeElement {
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub ty: TypeSyntax,
}

impl TupleTypeElement {
    pub fn unlabeled(ty: TypeSyntax) -> Self {
        Self {
            first_name: None,
            second_name: None,
            ty,
        }
    }

    pub fn labeled<S: Into<String>>(label: S, ty: TypeSyntax) -> Self {
        Self {
            first_name: Some(label.into()),
            second_name: None,
            ty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub parameters: Vec<TupleTypeElement>,
    pub effects: EffectSpecifiers,
    pub return_type: Box<TypeSyntax>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributedType {
    /// `inout`, `borrowing`, `consuming`, ...
    pub specifier: Option<String>,
    pub attributes: Vec<Attribute>,
    pub base: Box<TypeSyntax>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintSpecifier {
    Some,
    Any,
}

impl ConstraintSpecifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Some => "some",
            Self::Any => "any",
        }
    }
}

/// `async` / `throws` effects of a function declaration or function type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EffectSpecifiers {
    pub is_async: bool,
    pub throws: Option<ThrowsSpecifier>,
}

impl EffectSpecifiers {
    pub fn is_throwing(&self) -> bool {
        self.throws.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_async && self.throws.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThrowsSpecifier {
    Throws,
    Rethrows,
}

impl ThrowsSpecifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Throws => "throws",
            Self::Rethrows => "rethrows",
        }
    }
}
