use movemock_syntax::{Decl, ProtocolDecl};

use crate::diagnostics::Diagnostic;

/// Extract the protocol declaration a mock is generated for.
///
/// # Errors
///
/// Returns [`Diagnostic::OnlyApplicableToProtocol`] for any other declaration.
pub fn extract_protocol_declaration(declaration: &Decl) -> Result<&ProtocolDecl, Diagnostic> {
    match declaration {
        Decl::Protocol(protocol) => Ok(protocol),
        Decl::Class(_) | Decl::Variable(_) | Decl::IfConfig(_) | Decl::Other(_) => {
            Err(Diagnostic::OnlyApplicableToProtocol)
        }
    }
}
