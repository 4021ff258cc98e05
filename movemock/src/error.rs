use movemock_syntax::SourceLocation;
use thiserror::Error;

use crate::diagnostics::Diagnostic;

/// Error returned by [`expand_source`](crate::expand_source).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to parse source: {0}")]
    Parse(#[from] syn::Error),

    #[error("{}:{}: {}", .location.line, .location.column, .diagnostic)]
    Diagnostic {
        diagnostic: Diagnostic,
        location: SourceLocation,
    },
}

impl Error {
    /// The diagnostic that caused this error, if any.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Parse(_) => None,
            Self::Diagnostic { diagnostic, .. } => Some(diagnostic),
        }
    }
}
