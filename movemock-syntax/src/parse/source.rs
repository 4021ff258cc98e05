//! Reads whole Swift files.
//!
//! The lexer only knows Rust tokens, so string interpolation, raw strings or
//! backtick identifiers anywhere in a file would reject all of it. The text
//! is cut into top-level declarations first and each one is lexed on its
//! own. Declarations annotated with `@Mock` must parse completely, for the
//! others a failure falls back to their header (`struct Greeter`) and
//! finally to skipping them.

use std::ops::Range;
use std::str::FromStr;

use syn::parse::Result as ParseResult;

use crate::decl::{SourceFile, SourceItem, SourceLocation};

use super::attribute::MODIFIERS;

const MOCK_ATTRIBUTE: &str = "Mock";

const INTRODUCERS: &[&str] = &[
    "protocol",
    "var",
    "let",
    "struct",
    "class",
    "enum",
    "actor",
    "extension",
    "func",
    "import",
    "typealias",
    "init",
    "deinit",
    "subscript",
    "macro",
    "operator",
    "precedencegroup",
];

impl FromStr for SourceFile {
    type Err = syn::Error;

    fn from_str(source: &str) -> ParseResult<Self> {
        let mut items = Vec::new();

        for chunk in split_declarations(source) {
            items.extend(chunk.parse(source)?);
        }

        Ok(Self { items })
    }
}

/// Text of one top-level declaration.
#[derive(Debug)]
struct Chunk {
    range: Range<usize>,
    is_mock: bool,
    introducer: Option<String>,

    /// Offset of the first top-level `{` (or `=` of a variable).
    header_end: Option<usize>,
    has_body: bool,
}

impl Chunk {
    fn new(start: usize) -> Self {
        Self {
            range: start..start,
            is_mock: false,
            introducer: None,
            header_end: None,
            has_body: false,
        }
    }

    fn parse(&self, source: &str) -> ParseResult<Vec<SourceItem>> {
        let file = match syn::parse_str::<SourceFile>(&source[self.range.clone()]) {
            Ok(file) => file,
            Err(err) if self.is_mock => return Err(err),
            Err(_) => match self.parse_header(source) {
                Some(file) => file,
                None => return Ok(Vec::new()),
            },
        };

        let base = location_of(source, self.range.start);

        Ok(file
            .items
            .into_iter()
            .map(|item| SourceItem {
                location: relative_to(base, item.location),
                decl: item.decl,
            })
            .collect())
    }

    fn parse_header(&self, source: &str) -> Option<SourceFile> {
        let end = self.header_end?;
        let mut header = source[self.range.start..end].replace('`', " ");
        if self.has_body {
            header.push_str("{}");
        }

        syn::parse_str(&header).ok()
    }
}

fn split_declarations(source: &str) -> Vec<Chunk> {
    let mut scanner = Scanner::new(source);
    let mut chunks = Vec::new();
    let mut chunk = Chunk::new(0);

    let mut depth = 0usize;
    let mut at_boundary = false;
    let mut after_at = false;

    while let Some(c) = scanner.peek(0) {
        if scanner.skip_comment() {
            continue;
        }

        if c.is_whitespace() {
            if c == '\n' && depth == 0 {
                at_boundary = true;
            }
            scanner.pos += 1;

            continue;
        }

        let offset = scanner.offset();

        if let Some(hashes) = scanner.string_hashes() {
            scanner.skip_string(hashes);
            at_boundary = false;
            after_at = false;

            continue;
        }

        let word = scanner.word();

        if depth == 0 {
            let starts_declaration = c == '@'
                || word.is_some_and(|w| INTRODUCERS.contains(&w) || MODIFIERS.contains(&w));

            if at_boundary && starts_declaration && chunk.introducer.is_some() {
                chunk.range.end = offset;
                chunks.push(chunk);
                chunk = Chunk::new(offset);
            }
        }
        at_boundary = false;

        if let Some(word) = word {
            if depth == 0 {
                if after_at {
                    chunk.is_mock |= word == MOCK_ATTRIBUTE;
                } else if chunk.introducer.is_none() && INTRODUCERS.contains(&word) {
                    chunk.introducer = Some(word.to_owned());
                }
            }
            after_at = false;

            continue;
        }

        scanner.pos += 1;
        after_at = depth == 0 && c == '@';

        match c {
            '{' | '(' | '[' => {
                if depth == 0 && c == '{' && chunk.header_end.is_none() && chunk.introducer.is_some() {
                    chunk.header_end = Some(offset);
                    chunk.has_body = true;
                }
                depth += 1;
            }
            '}' | ')' | ']' => {
                depth = depth.saturating_sub(1);
                at_boundary = depth == 0 && c == '}';
            }
            ';' if depth == 0 => at_boundary = true,
            '=' if depth == 0
                && scanner.peek(0) != Some('=')
                && chunk.header_end.is_none()
                && matches!(chunk.introducer.as_deref(), Some("var" | "let")) =>
            {
                chunk.header_end = Some(offset);
            }
            _ => {}
        }
    }

    chunk.range.end = source.len();
    chunks.push(chunk);

    chunks
}

/// Character level walk over Swift text that knows comments and strings.
struct Scanner<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
        }
    }

    fn peek(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).map(|(_, c)| *c)
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map_or(self.source.len(), |(offset, _)| *offset)
    }

    /// Consumes an identifier, a backtick identifier is returned with its
    /// backticks.
    fn word(&mut self) -> Option<&'a str> {
        let start = self.offset();

        match self.peek(0)? {
            '`' => {
                self.pos += 1;
                while let Some(c) = self.peek(0) {
                    self.pos += 1;
                    if c == '`' || c == '\n' {
                        break;
                    }
                }
            }
            c if c == '_' || c.is_alphabetic() => {
                while self.peek(0).is_some_and(|c| c == '_' || c.is_alphanumeric()) {
                    self.pos += 1;
                }
            }
            _ => return None,
        }

        Some(&self.source[start..self.offset()])
    }

    fn skip_comment(&mut self) -> bool {
        match (self.peek(0), self.peek(1)) {
            (Some('/'), Some('/')) => {
                while self.peek(0).is_some_and(|c| c != '\n') {
                    self.pos += 1;
                }

                true
            }
            (Some('/'), Some('*')) => {
                self.pos += 2;

                let mut depth = 1usize;
                while depth > 0 {
                    match (self.peek(0), self.peek(1)) {
                        (None, _) => break,
                        (Some('/'), Some('*')) => {
                            depth += 1;
                            self.pos += 2;
                        }
                        (Some('*'), Some('/')) => {
                            depth -= 1;
                            self.pos += 2;
                        }
                        _ => self.pos += 1,
                    }
                }

                true
            }
            _ => false,
        }
    }

    /// Number of `#` in front of a string literal starting here.
    fn string_hashes(&self) -> Option<usize> {
        let hashes = (0..)
            .take_while(|&n| self.peek(n) == Some('#'))
            .count();

        (self.peek(hashes) == Some('"')).then_some(hashes)
    }

    fn is_hashes(&self, from: usize, hashes: usize) -> bool {
        (from..from + hashes).all(|n| self.peek(n) == Some('#'))
    }

    fn skip_string(&mut self, hashes: usize) {
        self.pos += hashes;

        let quotes = if (0..3).all(|n| self.peek(n) == Some('"')) {
            3
        } else {
            1
        };
        self.pos += quotes;

        while let Some(c) = self.peek(0) {
            if c == '\\' && self.is_hashes(1, hashes) {
                self.pos += 1 + hashes;

                if self.peek(0) == Some('(') {
                    self.pos += 1;
                    self.skip_interpolation();
                } else {
                    self.pos += 1;
                }
            } else if c == '"'
                && (0..quotes).all(|n| self.peek(n) == Some('"'))
                && self.is_hashes(quotes, hashes)
            {
                self.pos += quotes + hashes;

                return;
            } else {
                self.pos += 1;
            }
        }
    }

    /// Skips the code of `\( ... )` up to and including the closing parenthesis.
    fn skip_interpolation(&mut self) {
        let mut depth = 1usize;

        while let Some(c) = self.peek(0) {
            if self.skip_comment() {
                continue;
            }

            if let Some(hashes) = self.string_hashes() {
                self.skip_string(hashes);

                continue;
            }

            self.pos += 1;

            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}

fn location_of(source: &str, offset: usize) -> SourceLocation {
    let before = &source[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);

    SourceLocation {
        line: before.matches('\n').count() + 1,
        column: before[line_start..].chars().count(),
    }
}

/// Moves `location`, found in a text starting at `base`, into the file.
fn relative_to(base: SourceLocation, location: SourceLocation) -> SourceLocation {
    SourceLocation {
        line: base.line + location.line - 1,
        column: if location.line == 1 {
            base.column + location.column
        } else {
            location.column
        },
    }
}
