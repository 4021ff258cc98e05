use proc_macro2::{Delimiter, Ident, TokenStream, TokenTree};
use syn::{
    ext::IdentExt,
    parenthesized,
    parse::{Parse, ParseStream, Result as ParseResult},
    punctuated::Punctuated,
    LitStr, Token,
};

use crate::attribute::{Attribute, AttributeArgument, AttributeValue, Modifier};

use super::{parse_identifier, peek2_keyword, skip_doc_comments};

pub(super) const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "fileprivate",
    "internal",
    "open",
    "package",
    "static",
    "final",
    "override",
    "required",
    "convenience",
    "mutating",
    "nonmutating",
    "nonisolated",
    "isolated",
    "dynamic",
    "optional",
    "lazy",
    "weak",
    "unowned",
    "indirect",
    "consuming",
    "borrowing",
    "distributed",
];

/// Attributes that never take arguments, a following `(` starts a type.
const ARGUMENTLESS_ATTRIBUTES: &[&str] = &[
    "escaping",
    "autoclosure",
    "Sendable",
    "MainActor",
    "noescape",
];

const MODIFIER_CLASS_TARGETS: &[&str] = &["func", "var", "let", "subscript"];

/// Parse the attributes in front of a declaration or type.
pub(crate) fn parse_attributes(input: ParseStream<'_>) -> ParseResult<Vec<Attribute>> {
    let mut attributes = Vec::new();

    loop {
        skip_doc_comments(input)?;

        if !input.peek(Token![@]) {
            return Ok(attributes);
        }

        attributes.push(input.parse()?);
    }
}

/// Parse the modifiers in front of a declaration.
///
/// `class` only counts as modifier if it is followed by a member keyword,
/// otherwise it introduces a class declaration.
pub(crate) fn parse_modifiers(input: ParseStream<'_>) -> ParseResult<Vec<Modifier>> {
    let mut modifiers = Vec::new();

    loop {
        let Some((ident, _)) = input.cursor().ident() else {
            return Ok(modifiers);
        };

        let is_modifier = MODIFIERS.iter().any(|m| ident == m)
            || (ident == "class"
                && MODIFIER_CLASS_TARGETS
                    .iter()
                    .any(|target| peek2_keyword(input, target)));

        if !is_modifier {
            return Ok(modifiers);
        }

        let name = parse_identifier(input)?;
        let detail = if input.peek(syn::token::Paren) {
            let content;
            parenthesized!(content in input);

            Some(parse_identifier(&content)?)
        } else {
            None
        };

        modifiers.push(Modifier { name, detail });
    }
}

impl Parse for Attribute {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        input.parse::<Token![@]>()?;

        let name = Ident::parse_any(input)?;
        let arguments = if is_adjacent_argument_list(input, &name) {
            let content;
            parenthesized!(content in input);

            let arguments = Punctuated::<AttributeArgument, Token![,]>::parse_terminated(&content)?;

            Some(arguments.into_iter().collect())
        } else {
            None
        };

        Ok(Self {
            name: name.to_string(),
            arguments,
        })
    }
}

/// `@convention(c)` has arguments, `@escaping (Int) -> Void` has not. The
/// only difference is the whitespace between name and parenthesis, so the
/// span locations decide. Tokens built in code all share one span, known
/// attributes without arguments are therefore never followed by a list.
fn is_adjacent_argument_list(input: ParseStream<'_>, name: &Ident) -> bool {
    if ARGUMENTLESS_ATTRIBUTES.iter().any(|attribute| name == attribute) {
        return false;
    }

    match input.cursor().group(Delimiter::Parenthesis) {
        Some((_, span, _)) => span.open().start() == name.span().end(),
        None => false,
    }
}

impl Parse for AttributeArgument {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let label = if input.peek(Ident::peek_any) && input.peek2(Token![:]) {
            let label = parse_identifier(input)?;
            input.parse::<Token![:]>()?;

            Some(label)
        } else {
            None
        };

        let value = if input.peek(LitStr) && (input.peek2(Token![,]) || peek_is_last(input)) {
            AttributeValue::String(input.parse::<LitStr>()?.value())
        } else {
            AttributeValue::Verbatim(parse_verbatim_argument(input)?.to_string())
        };

        Ok(Self { label, value })
    }
}

fn peek_is_last(input: ParseStream<'_>) -> bool {
    input
        .cursor()
        .token_tree()
        .is_some_and(|(_, rest)| rest.eof())
}

/// Collect all tokens up to the next `,`.
fn parse_verbatim_argument(input: ParseStream<'_>) -> ParseResult<TokenStream> {
    input.step(|cursor| {
        let mut rest = *cursor;
        let mut tokens = TokenStream::new();

        while let Some((tt, next)) = rest.token_tree() {
            if matches!(&tt, TokenTree::Punct(p) if p.as_char() == ',') {
                break;
            }

            tokens.extend([tt]);
            rest = next;
        }

        if tokens.is_empty() {
            return Err(cursor.error("expected attribute argument"));
        }

        Ok((tokens, rest))
    })
}
