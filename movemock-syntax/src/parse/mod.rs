//! The [`parse`](self) module reads Swift declarations from a token stream.
//!
//! Swift source is lexed by `proc-macro2` and parsed with the `syn` parse
//! infrastructure using a Swift grammar. Keywords are matched as plain
//! identifiers since none of them are reserved in the token model. Comments
//! are dropped by the lexer, doc comments are skipped explicitly.
//!
//! Whole files are read through [`FromStr`](std::str::FromStr) on
//! [`SourceFile`](crate::SourceFile), which lexes every top-level declaration
//! on its own.

mod attribute;
mod decl;
mod source;
mod types;

use proc_macro2::{Delimiter, Ident, Span, TokenTree};
use syn::{
    ext::IdentExt,
    parse::{ParseStream, Result as ParseResult},
    Token,
};

pub(crate) use attribute::{parse_attributes, parse_modifiers};

/// Returns `true` if the next token is the identifier `keyword`.
pub(crate) fn peek_keyword(input: ParseStream<'_>, keyword: &str) -> bool {
    input
        .cursor()
        .ident()
        .is_some_and(|(ident, _)| ident == keyword)
}

/// Returns `true` if the token after the next one is the identifier `keyword`.
pub(crate) fn peek2_keyword(input: ParseStream<'_>, keyword: &str) -> bool {
    input
        .cursor()
        .token_tree()
        .and_then(|(_, rest)| rest.ident())
        .is_some_and(|(ident, _)| ident == keyword)
}

pub(crate) fn parse_keyword(input: ParseStream<'_>, keyword: &str) -> ParseResult<Span> {
    input.step(|cursor| match cursor.ident() {
        Some((ident, rest)) if ident == keyword => Ok((ident.span(), rest)),
        _ => Err(cursor.error(format!("expected `{keyword}`"))),
    })
}

/// Parse the next token as identifier, including `_` and words that would be
/// keywords in Rust.
pub(crate) fn parse_identifier(input: ParseStream<'_>) -> ParseResult<String> {
    Ok(Ident::parse_any(input)?.to_string())
}

/// Skip `///` and `/** */` comments, the lexer turns them into `#[doc = ".."]`.
pub(crate) fn skip_doc_comments(input: ParseStream<'_>) -> ParseResult<()> {
    loop {
        let cursor = input.cursor();
        let Some((TokenTree::Punct(punct), rest)) = cursor.token_tree() else {
            return Ok(());
        };

        if punct.as_char() != '#' {
            return Ok(());
        }

        let rest = match rest.punct() {
            Some((p, rest)) if p.as_char() == '!' => rest,
            _ => rest,
        };

        if rest.group(Delimiter::Bracket).is_none() {
            return Ok(());
        }

        input.step(|cursor| {
            let mut rest = *cursor;
            while let Some((tt, next)) = rest.token_tree() {
                rest = next;
                if matches!(&tt, TokenTree::Group(g) if g.delimiter() == Delimiter::Bracket) {
                    break;
                }
            }

            Ok(((), rest))
        })?;
    }
}

/// Skip an optional `;` member separator.
pub(crate) fn skip_semicolons(input: ParseStream<'_>) -> ParseResult<()> {
    while input.peek(Token![;]) {
        input.parse::<Token![;]>()?;
    }

    Ok(())
}
