//! The [`print`](self) module renders syntax trees as Swift source text.
//!
//! Types and expressions fit on a single line and implement [`Display`]
//! directly. Declarations and statements are laid out by [`Printer`], which
//! indents nested blocks by four spaces. Rendering is deterministic: the same
//! tree always produces the same text.

/// Implements [`Display`] for a node by running it through a fresh [`Printer`].
macro_rules! impl_display_with_printer {
    ($ty:ty, $method:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut printer = $crate::print::Printer::default();
                printer.$method(self);

                f.write_str(&printer.finish())
            }
        }
    };
}

pub(crate) use impl_display_with_printer;

mod decl;
mod stmt;
mod types;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::decl::Decl;

const INDENT: &str = "    ";

/// Render a list of declarations, one after another.
pub fn render(decls: &[Decl]) -> String {
    let mut printer = Printer::default();

    for decl in decls {
        printer.decl(decl);
    }

    printer.finish()
}

#[derive(Default)]
pub(crate) struct Printer {
    lines: Vec<String>,
    indent: usize,
}

impl Printer {
    pub(crate) fn finish(self) -> String {
        self.lines.join("\n")
    }

    fn line<S: AsRef<str>>(&mut self, text: S) {
        self.lines
            .push(format!("{}{}", INDENT.repeat(self.indent), text.as_ref()));
    }

    fn indented<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }

    fn block<S, F>(&mut self, header: S, f: F)
    where
        S: Display,
        F: FnOnce(&mut Self),
    {
        self.line(format!("{header} {{"));
        self.indented(f);
        self.line("}");
    }
}

/// Write the items of `iter` separated by `separator`.
pub(crate) fn write_separated<I>(f: &mut Formatter<'_>, iter: I, separator: &str) -> FmtResult
where
    I: IntoIterator,
    I::Item: Display,
{
    for (i, item) in iter.into_iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }

        write!(f, "{item}")?;
    }

    Ok(())
}
