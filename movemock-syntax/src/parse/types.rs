use proc_macro2::Ident;
use syn::{
    bracketed,
    ext::IdentExt,
    parenthesized,
    parse::{Parse, ParseStream, Result as ParseResult},
    punctuated::Punctuated,
    token::{Bracket, Paren},
    Token,
};

use crate::types::{
    AttributedType, ConstraintSpecifier, EffectSpecifiers, FunctionType, IdentifierType,
    MemberType, ThrowsSpecifier, TupleTypeElement, TypeSyntax,
};

use super::{parse_attributes, parse_identifier, parse_keyword, peek_keyword};

const TYPE_SPECIFIERS: &[&str] = &["inout", "borrowing", "consuming", "isolated", "sending"];

impl Parse for TypeSyntax {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let first = parse_non_composition(input)?;

        if !is_composition_operator(input) {
            return Ok(first);
        }

        let mut types = vec![first];
        while is_composition_operator(input) {
            input.parse::<Token![&]>()?;
            types.push(parse_non_composition(input)?);
        }

        Ok(Self::Composition(types))
    }
}

fn is_composition_operator(input: ParseStream<'_>) -> bool {
    input.peek(Token![&]) && !input.peek(Token![&&])
}

fn parse_non_composition(input: ParseStream<'_>) -> ParseResult<TypeSyntax> {
    let specifier = TYPE_SPECIFIERS
        .iter()
        .find(|specifier| peek_keyword(input, specifier))
        .map(|specifier| parse_keyword(input, specifier).map(|_| (*specifier).to_owned()))
        .transpose()?;

    if specifier.is_some() || input.peek(Token![@]) {
        let attributes = parse_attributes(input)?;
        let base = parse_non_composition(input)?;

        return Ok(TypeSyntax::Attributed(AttributedType {
            specifier,
            attributes,
            base: Box::new(base),
        }));
    }

    for specifier in [ConstraintSpecifier::Some, ConstraintSpecifier::Any] {
        if peek_keyword(input, specifier.as_str()) && starts_type_after_keyword(input) {
            parse_keyword(input, specifier.as_str())?;
            let constraint = parse_non_composition(input)?;

            return Ok(TypeSyntax::Constrained {
                specifier,
                constraint: Box::new(constraint),
            });
        }
    }

    let primary = parse_primary(input)?;

    if let TypeSyntax::Tuple(parameters) = primary {
        if peek_keyword(input, "async")
            || peek_keyword(input, "throws")
            || peek_keyword(input, "rethrows")
            || input.peek(Token![->])
        {
            let effects = input.parse::<EffectSpecifiers>()?;
            input.parse::<Token![->]>()?;
            let return_type = input.parse::<TypeSyntax>()?;

            return Ok(TypeSyntax::Function(FunctionType {
                parameters,
                effects,
                return_type: Box::new(return_type),
            }));
        }

        return parse_postfix(input, TypeSyntax::Tuple(parameters));
    }

    parse_postfix(input, primary)
}

/// `any` and `some` are only keywords if a type follows.
fn starts_type_after_keyword(input: ParseStream<'_>) -> bool {
    input.peek2(Ident::peek_any) || input.peek2(Paren) || input.peek2(Bracket)
}

fn parse_primary(input: ParseStream<'_>) -> ParseResult<TypeSyntax> {
    if input.peek(Paren) {
        let content;
        parenthesized!(content in input);

        let elements = Punctuated::<TupleTypeElement, Token![,]>::parse_terminated(&content)?;

        return Ok(TypeSyntax::Tuple(elements.into_iter().collect()));
    }

    if input.peek(Bracket) {
        let content;
        bracketed!(content in input);

        let element = content.parse::<TypeSyntax>()?;
        let ty = if content.peek(Token![:]) {
            content.parse::<Token![:]>()?;

            TypeSyntax::Dictionary {
                key: Box::new(element),
                value: Box::new(content.parse()?),
            }
        } else {
            element.array()
        };

        if !content.is_empty() {
            return Err(content.error("unexpected token in collection type"));
        }

        return Ok(ty);
    }

    if !input.peek(Ident::peek_any) {
        return Err(input.error("expected type"));
    }

    let name = parse_identifier(input)?;
    let generic_arguments = parse_generic_arguments(input)?;

    Ok(TypeSyntax::Identifier(IdentifierType {
        name,
        generic_arguments,
    }))
}

fn parse_postfix(input: ParseStream<'_>, mut ty: TypeSyntax) -> ParseResult<TypeSyntax> {
    loop {
        if input.peek(Token![?]) {
            input.parse::<Token![?]>()?;
            ty = ty.optional();
        } else if input.peek(Token![!]) && !input.peek(Token![!=]) {
            input.parse::<Token![!]>()?;
            ty = ty.implicitly_unwrapped();
        } else if input.peek(Token![.]) && input.peek2(Ident::peek_any) {
            input.parse::<Token![.]>()?;
            let name = parse_identifier(input)?;
            let generic_arguments = parse_generic_arguments(input)?;

            ty = TypeSyntax::Member(MemberType {
                base: Box::new(ty),
                name,
                generic_arguments,
            });
        } else {
            return Ok(ty);
        }
    }
}

fn parse_generic_arguments(input: ParseStream<'_>) -> ParseResult<Vec<TypeSyntax>> {
    let mut arguments = Vec::new();

    if !input.peek(Token![<]) {
        return Ok(arguments);
    }

    input.parse::<Token![<]>()?;

    loop {
        arguments.push(input.parse::<TypeSyntax>()?);

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        } else {
            input.parse::<Token![>]>()?;

            return Ok(arguments);
        }
    }
}

impl Parse for TupleTypeElement {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let (first_name, second_name) = if input.peek(Ident::peek_any) && input.peek2(Token![:]) {
            let first_name = parse_identifier(input)?;
            input.parse::<Token![:]>()?;

            (Some(first_name), None)
        } else if input.peek(Ident::peek_any)
            && input.peek2(Ident::peek_any)
            && input.peek3(Token![:])
            && !is_type_keyword(input)
        {
            let first_name = parse_identifier(input)?;
            let second_name = parse_identifier(input)?;
            input.parse::<Token![:]>()?;

            (Some(first_name), Some(second_name))
        } else {
            (None, None)
        };

        let ty = input.parse()?;

        Ok(Self {
            first_name,
            second_name,
            ty,
        })
    }
}

/// `inout Foo: ...` is not a labeled element, the first word is part of the type.
fn is_type_keyword(input: ParseStream<'_>) -> bool {
    TYPE_SPECIFIERS
        .iter()
        .chain(&["some", "any"])
        .any(|keyword| peek_keyword(input, keyword))
}

impl Parse for EffectSpecifiers {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let is_async = if peek_keyword(input, "async") {
            parse_keyword(input, "async")?;

            true
        } else {
            false
        };

        let throws = if peek_keyword(input, "throws") {
            parse_keyword(input, "throws")?;

            Some(ThrowsSpecifier::Throws)
        } else if peek_keyword(input, "rethrows") {
            parse_keyword(input, "rethrows")?;

            Some(ThrowsSpecifier::Rethrows)
        } else {
            None
        };

        if throws.is_some() && peek_keyword(input, "async") {
            return Err(input.error("`async` must precede `throws`"));
        }

        Ok(Self { is_async, throws })
    }
}
