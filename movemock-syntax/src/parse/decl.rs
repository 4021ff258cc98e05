use proc_macro2::{Delimiter, Ident, TokenTree};
use syn::{
    braced,
    ext::IdentExt,
    parenthesized,
    parse::{Parse, ParseStream, Result as ParseResult},
    punctuated::Punctuated,
    token::{Brace, Paren},
    Token,
};

use crate::attribute::{Attribute, Modifier};
use crate::decl::{
    AccessorBlock, AccessorDecl, AccessorKind, AssociatedTypeDecl, BindingKeyword, Decl, DeclKind,
    FunctionDecl, FunctionSignature, GenericParameter, GenericParameterClause, GenericRequirement,
    MemberDecl, OtherDecl, Parameter, Pattern, PatternBinding, ProtocolDecl, RequirementRelation,
    SourceFile, SourceItem, SourceLocation, VariableDecl,
};
use crate::types::{EffectSpecifiers, TypeSyntax};

use super::{
    parse_attributes, parse_identifier, parse_keyword, parse_modifiers, peek_keyword,
    skip_doc_comments, skip_semicolons,
};

/// Attributes and modifiers that precede every declaration.
struct DeclPrefix {
    attributes: Vec<Attribute>,
    modifiers: Vec<Modifier>,
}

impl Parse for DeclPrefix {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let attributes = parse_attributes(input)?;
        let modifiers = parse_modifiers(input)?;

        Ok(Self {
            attributes,
            modifiers,
        })
    }
}

impl Parse for SourceFile {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let mut items = Vec::new();

        loop {
            skip_doc_comments(input)?;
            skip_semicolons(input)?;

            if input.is_empty() {
                return Ok(Self { items });
            }

            let start = input.span().start();
            let location = SourceLocation {
                line: start.line,
                column: start.column,
            };
            let decl = input.parse()?;

            items.push(SourceItem { location, decl });
        }
    }
}

impl Parse for Decl {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let prefix = input.parse::<DeclPrefix>()?;

        if peek_keyword(input, "protocol") {
            return parse_protocol(input, prefix).map(Self::Protocol);
        }

        if peek_keyword(input, "var") || peek_keyword(input, "let") {
            return parse_variable(input, prefix).map(Self::Variable);
        }

        let kind = input
            .cursor()
            .ident()
            .and_then(|(ident, _)| DeclKind::from_keyword(&ident.to_string()));

        match kind {
            Some(kind) => parse_other(input, prefix, kind).map(Self::Other),
            None => Err(input.error("expected declaration")),
        }
    }
}

impl Parse for ProtocolDecl {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let prefix = input.parse()?;

        parse_protocol(input, prefix)
    }
}

impl Parse for MemberDecl {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let prefix = input.parse::<DeclPrefix>()?;

        if peek_keyword(input, "associatedtype") {
            parse_associated_type(input, prefix).map(Self::AssociatedType)
        } else if peek_keyword(input, "var") || peek_keyword(input, "let") {
            parse_variable(input, prefix).map(Self::Variable)
        } else if peek_keyword(input, "func") {
            parse_function(input, prefix).map(Self::Function)
        } else {
            Err(input.error("unsupported protocol member, expected `associatedtype`, `var` or `func`"))
        }
    }
}

impl Parse for VariableDecl {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let prefix = input.parse()?;

        parse_variable(input, prefix)
    }
}

impl Parse for FunctionDecl {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let prefix = input.parse()?;

        parse_function(input, prefix)
    }
}

fn parse_protocol(input: ParseStream<'_>, prefix: DeclPrefix) -> ParseResult<ProtocolDecl> {
    let DeclPrefix {
        attributes,
        modifiers,
    } = prefix;

    parse_keyword(input, "protocol")?;
    let name = parse_identifier(input)?;

    if input.peek(Token![<]) {
        return Err(input.error("primary associated types are not supported"));
    }

    let inheritance = parse_inheritance(input)?;

    if peek_keyword(input, "where") {
        return Err(input.error("`where` clauses on protocols are not supported"));
    }

    let content;
    braced!(content in input);

    let mut members = Vec::new();
    loop {
        skip_doc_comments(&content)?;
        skip_semicolons(&content)?;

        if content.is_empty() {
            break;
        }

        members.push(content.parse()?);
    }

    Ok(ProtocolDecl {
        attributes,
        modifiers,
        name,
        inheritance,
        members,
    })
}

fn parse_inheritance(input: ParseStream<'_>) -> ParseResult<Vec<TypeSyntax>> {
    let mut inheritance = Vec::new();

    if !input.peek(Token![:]) {
        return Ok(inheritance);
    }

    input.parse::<Token![:]>()?;

    loop {
        inheritance.push(input.parse()?);

        if !input.peek(Token![,]) {
            return Ok(inheritance);
        }

        input.parse::<Token![,]>()?;
    }
}

fn parse_associated_type(
    input: ParseStream<'_>,
    prefix: DeclPrefix,
) -> ParseResult<AssociatedTypeDecl> {
    let DeclPrefix {
        attributes,
        modifiers,
    } = prefix;

    parse_keyword(input, "associatedtype")?;
    let name = parse_identifier(input)?;
    let inheritance = parse_inheritance(input)?;

    let default = if input.peek(Token![=]) {
        input.parse::<Token![=]>()?;

        Some(input.parse()?)
    } else {
        None
    };

    Ok(AssociatedTypeDecl {
        attributes,
        modifiers,
        name,
        inheritance,
        default,
    })
}

fn parse_variable(input: ParseStream<'_>, prefix: DeclPrefix) -> ParseResult<VariableDecl> {
    let DeclPrefix {
        attributes,
        modifiers,
    } = prefix;

    let binding_keyword = if peek_keyword(input, "let") {
        parse_keyword(input, "let")?;

        BindingKeyword::Let
    } else {
        parse_keyword(input, "var")?;

        BindingKeyword::Var
    };

    let mut bindings = vec![input.parse::<PatternBinding>()?];
    while input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
        bindings.push(input.parse()?);
    }

    Ok(VariableDecl {
        attributes,
        modifiers,
        binding_keyword,
        bindings,
    })
}

impl Parse for PatternBinding {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let pattern = input.parse::<Pattern>()?;

        if !input.peek(Token![:]) {
            return Err(input.error("expected type annotation"));
        }

        input.parse::<Token![:]>()?;
        let ty = input.parse::<TypeSyntax>()?;

        let accessors = if input.peek(Brace) {
            Some(input.parse::<AccessorBlock>()?)
        } else {
            None
        };

        Ok(Self {
            pattern,
            ty: Some(ty),
            initializer: None,
            accessors,
        })
    }
}

impl Parse for Pattern {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        if input.peek(Paren) {
            let content;
            parenthesized!(content in input);

            let patterns = Punctuated::<Pattern, Token![,]>::parse_terminated(&content)?;

            return Ok(Self::Tuple(patterns.into_iter().collect()));
        }

        let name = parse_identifier(input)?;

        Ok(if name == "_" {
            Self::Wildcard
        } else {
            Self::Identifier(name)
        })
    }
}

impl Parse for AccessorBlock {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let content;
        braced!(content in input);

        let mut accessors = Vec::new();
        while !content.is_empty() {
            accessors.push(content.parse()?);
        }

        Ok(Self::Accessors(accessors))
    }
}

impl Parse for AccessorDecl {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let modifier = parse_modifiers(input)?.into_iter().next();

        let kind = if peek_keyword(input, "get") {
            parse_keyword(input, "get")?;

            AccessorKind::Get
        } else if peek_keyword(input, "set") {
            parse_keyword(input, "set")?;

            AccessorKind::Set
        } else {
            return Err(input.error("expected `get` or `set`"));
        };

        let effects = input.parse()?;

        if input.peek(Brace) {
            return Err(input.error("accessor bodies are not supported in protocols"));
        }

        Ok(Self {
            modifier,
            kind,
            effects,
            body: None,
        })
    }
}

fn parse_function(input: ParseStream<'_>, prefix: DeclPrefix) -> ParseResult<FunctionDecl> {
    let DeclPrefix {
        attributes,
        modifiers,
    } = prefix;

    parse_keyword(input, "func")?;
    let name = parse_identifier(input)?;
    let generic_parameters = if input.peek(Token![<]) {
        Some(input.parse::<GenericParameterClause>()?)
    } else {
        None
    };
    let signature = input.parse::<FunctionSignature>()?;
    let where_clause = parse_where_clause(input)?;

    if input.peek(Brace) {
        return Err(input.error("function bodies are not supported in protocols"));
    }

    Ok(FunctionDecl {
        attributes,
        modifiers,
        name,
        generic_parameters,
        signature,
        where_clause,
        body: None,
    })
}

impl Parse for FunctionSignature {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let content;
        parenthesized!(content in input);

        let parameters = Punctuated::<Parameter, Token![,]>::parse_terminated(&content)?
            .into_iter()
            .collect();
        let effects = input.parse::<EffectSpecifiers>()?;

        let return_type = if input.peek(Token![->]) {
            input.parse::<Token![->]>()?;

            Some(input.parse()?)
        } else {
            None
        };

        Ok(Self {
            parameters,
            effects,
            return_type,
        })
    }
}

impl Parse for Parameter {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        skip_doc_comments(input)?;

        let first_name = parse_identifier(input)?;
        let second_name = if input.peek(Ident::peek_any) {
            Some(parse_identifier(input)?)
        } else {
            None
        };

        input.parse::<Token![:]>()?;
        let ty = input.parse()?;

        if input.peek(Token![...]) || input.peek(Token![=]) {
            return Err(input.error("variadic parameters and default values are not supported"));
        }

        Ok(Self {
            first_name,
            second_name,
            ty,
        })
    }
}

impl Parse for GenericParameterClause {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        input.parse::<Token![<]>()?;

        let mut parameters = Vec::new();
        loop {
            parameters.push(input.parse()?);

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            } else {
                input.parse::<Token![>]>()?;

                return Ok(Self { parameters });
            }
        }
    }
}

impl Parse for GenericParameter {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let name = parse_identifier(input)?;

        let inherited_type = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;

            Some(input.parse()?)
        } else {
            None
        };

        Ok(Self {
            name,
            inherited_type,
        })
    }
}

fn parse_where_clause(input: ParseStream<'_>) -> ParseResult<Vec<GenericRequirement>> {
    let mut requirements = Vec::new();

    if !peek_keyword(input, "where") {
        return Ok(requirements);
    }

    parse_keyword(input, "where")?;

    loop {
        requirements.push(input.parse()?);

        if !input.peek(Token![,]) {
            return Ok(requirements);
        }

        input.parse::<Token![,]>()?;
    }
}

impl Parse for GenericRequirement {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let left = input.parse()?;

        let relation = if input.peek(Token![==]) {
            input.parse::<Token![==]>()?;

            RequirementRelation::SameType
        } else {
            input.parse::<Token![:]>()?;

            RequirementRelation::Conformance
        };

        let right = input.parse()?;

        Ok(Self {
            left,
            relation,
            right,
        })
    }
}

/// Declarations the tree does not model keep their name, the rest is skipped.
fn parse_other(input: ParseStream<'_>, prefix: DeclPrefix, kind: DeclKind) -> ParseResult<OtherDecl> {
    let DeclPrefix {
        attributes,
        modifiers,
    } = prefix;

    parse_keyword(input, kind.as_str())?;

    let name = match kind {
        DeclKind::Import => {
            let mut path = vec![parse_identifier(input)?];
            while input.peek(Token![.]) {
                input.parse::<Token![.]>()?;
                path.push(parse_identifier(input)?);
            }

            return Ok(OtherDecl {
                attributes,
                modifiers,
                kind,
                name: path.join("."),
            });
        }
        DeclKind::Extension => input.parse::<TypeSyntax>()?.to_string(),
        _ => parse_identifier(input)?,
    };

    skip_body(input)?;

    Ok(OtherDecl {
        attributes,
        modifiers,
        kind,
        name,
    })
}

/// Skip everything up to and including the next `{ ... }` group.
fn skip_body(input: ParseStream<'_>) -> ParseResult<()> {
    input.step(|cursor| {
        let mut rest = *cursor;

        while let Some((tt, next)) = rest.token_tree() {
            rest = next;

            if matches!(&tt, TokenTree::Group(g) if g.delimiter() == Delimiter::Brace) {
                return Ok(((), rest));
            }
        }

        Err(cursor.error("expected declaration body"))
    })
}
