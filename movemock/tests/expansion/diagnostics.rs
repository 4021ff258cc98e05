use movemock::{Diagnostic, Severity};

#[test]
fn messages() {
    assert_eq!(
        "'@Mock' can only be applied to a 'protocol'",
        Diagnostic::OnlyApplicableToProtocol.message()
    );
    assert_eq!(
        "Variable declaration in a 'protocol' with the '@Mock' attribute must have exactly one binding",
        Diagnostic::VariableDeclInProtocolWithNotSingleBinding.message()
    );
    assert_eq!(
        "Variable declaration in a 'protocol' with the '@Mock' attribute must have identifier pattern",
        Diagnostic::VariableDeclInProtocolWithNotIdentifierPattern.message()
    );
}

#[test]
fn ids() {
    let id = Diagnostic::OnlyApplicableToProtocol.id();
    assert_eq!("MoveMockMacros", id.domain);
    assert_eq!("onlyApplicableToProtocol", id.id);
    assert_eq!("MoveMockMacros.onlyApplicableToProtocol", id.to_string());

    assert_eq!(
        "variableDeclInProtocolWithNotSingleBinding",
        Diagnostic::VariableDeclInProtocolWithNotSingleBinding.id().id
    );
    assert_eq!(
        "variableDeclInProtocolWithNotIdentifierPattern",
        Diagnostic::VariableDeclInProtocolWithNotIdentifierPattern.id().id
    );
}

#[test]
fn severity() {
    for diagnostic in [
        Diagnostic::OnlyApplicableToProtocol,
        Diagnostic::VariableDeclInProtocolWithNotSingleBinding,
        Diagnostic::VariableDeclInProtocolWithNotIdentifierPattern,
    ] {
        assert_eq!(Severity::Error, diagnostic.severity());
    }
}
