//! The [`diagnostics`](self) module contains the failures the mock synthesis
//! can raise.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Structured failure of a mock synthesis. Every diagnostic is fatal.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    #[error("'@Mock' can only be applied to a 'protocol'")]
    OnlyApplicableToProtocol,

    #[error("Variable declaration in a 'protocol' with the '@Mock' attribute must have exactly one binding")]
    VariableDeclInProtocolWithNotSingleBinding,

    #[error("Variable declaration in a 'protocol' with the '@Mock' attribute must have identifier pattern")]
    VariableDeclInProtocolWithNotIdentifierPattern,
}

impl Diagnostic {
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::OnlyApplicableToProtocol
            | Self::VariableDeclInProtocolWithNotSingleBinding
            | Self::VariableDeclInProtocolWithNotIdentifierPattern => Severity::Error,
        }
    }

    pub fn id(&self) -> DiagnosticId {
        let id = match self {
            Self::OnlyApplicableToProtocol => "onlyApplicableToProtocol",
            Self::VariableDeclInProtocolWithNotSingleBinding => {
                "variableDeclInProtocolWithNotSingleBinding"
            }
            Self::VariableDeclInProtocolWithNotIdentifierPattern => {
                "variableDeclInProtocolWithNotIdentifierPattern"
            }
        };

        DiagnosticId {
            domain: DiagnosticId::DOMAIN,
            id,
        }
    }
}

/// How the host reports a [`Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Fails the surrounding build.
    Error,
}

/// Stable identifier of a [`Diagnostic`], `domain.id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticId {
    pub domain: &'static str,
    pub id: &'static str,
}

impl DiagnosticId {
    pub const DOMAIN: &'static str = "MoveMockMacros";
}

impl Display for DiagnosticId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.domain, self.id)
    }
}
