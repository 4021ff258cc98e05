use movemock::{expand_source, Diagnostic, Error};
use movemock_syntax::SourceLocation;
use pretty_assertions::assert_eq;

#[test]
fn service_protocol() {
    let source = "
        @Mock
        public protocol ServiceProtocol {
            var name: String {
                get
            }
            var anyProtocol: any Codable {
                get
                set
            }
            var secondName: String? {
                get
            }
            var added: () -> Void {
                get
                set
            }
            var removed: (() -> Void)? {
                get
                set
            }

            mutating func logout()
            func initialize(name: String, secondName: String?)
            func fetchConfig() async throws -> [String: String]
            func fetchData(_ name: (String, count: Int)) async -> (() -> Void)
        }
    ";

    assert_eq!(
        "class ServiceProtocolMock: ServiceProtocol {
    var name: String {
        get {
            underlyingName
        }
        set {
            underlyingName = newValue
        }
    }
    var underlyingName: (String)!
    var anyProtocol: any Codable {
        get {
            underlyingAnyProtocol
        }
        set {
            underlyingAnyProtocol = newValue
        }
    }
    var underlyingAnyProtocol: (any Codable)!
    var secondName: String?
    var added: () -> Void {
        get {
            underlyingAdded
        }
        set {
            underlyingAdded = newValue
        }
    }
    var underlyingAdded: (() -> Void)!
    var removed: (() -> Void)?
    var logoutInvokedCount = 0
    var logoutInvoked: Bool {
        return logoutInvokedCount > 0
    }
    var logoutClosure: (() -> Void)?
    func logout() {
        logoutInvokedCount += 1
        logoutClosure?()
    }
    var initializeNameSecondNameInvokedCount = 0
    var initializeNameSecondNameInvoked: Bool {
        return initializeNameSecondNameInvokedCount > 0
    }
    var initializeNameSecondNameReceivedArguments: (name: String, secondName: String?)?
    var initializeNameSecondNameReceivedInvocations: [(name: String, secondName: String?)] = []
    var initializeNameSecondNameClosure: ((String, String?) -> Void)?
    func initialize(name: String, secondName: String?) {
        initializeNameSecondNameInvokedCount += 1
        initializeNameSecondNameReceivedArguments = (name, secondName)
        initializeNameSecondNameReceivedInvocations.append((name, secondName))
        initializeNameSecondNameClosure?(name, secondName)
    }
    var fetchConfigInvokedCount = 0
    var fetchConfigInvoked: Bool {
        return fetchConfigInvokedCount > 0
    }
    var fetchConfigThrowableError: Error?
    var fetchConfigReturnValue: [String: String]!
    var fetchConfigClosure: (() async throws -> [String: String])?
    func fetchConfig() async throws -> [String: String] {
        fetchConfigInvokedCount += 1
        if let fetchConfigThrowableError {
            throw fetchConfigThrowableError
        }
        if fetchConfigClosure != nil {
            return try await fetchConfigClosure!()
        } else {
            return fetchConfigReturnValue
        }
    }
    var fetchDataInvokedCount = 0
    var fetchDataInvoked: Bool {
        return fetchDataInvokedCount > 0
    }
    var fetchDataReceivedName: (String, count: Int)?
    var fetchDataReceivedInvocations: [(String, count: Int)] = []
    var fetchDataReturnValue: (() -> Void)!
    var fetchDataClosure: (((String, count: Int)) async -> (() -> Void))?
    func fetchData(_ name: (String, count: Int)) async -> (() -> Void) {
        fetchDataInvokedCount += 1
        fetchDataReceivedName = (name)
        fetchDataReceivedInvocations.append((name))
        if fetchDataClosure != nil {
            return await fetchDataClosure!(name)
        } else {
            return fetchDataReturnValue
        }
    }
}",
        expand_source(source).unwrap()
    );
}

#[test]
fn behind_flag() {
    let source = r#"
        @Mock(behindPreprocessorFlag: "CUSTOM")
        public protocol ServiceProtocol {
            var variable: Bool? { get set }
        }
    "#;

    assert_eq!(
        "#if CUSTOM
class ServiceProtocolMock: ServiceProtocol {
    var variable: Bool?
}
#endif",
        expand_source(source).unwrap()
    );
}

#[test]
fn declarations_without_attribute_are_skipped() {
    let source = "
        import Foundation

        protocol Unrelated {
            func run()
        }

        /// Loads things.
        @Mock
        protocol Loader {}
    ";

    assert_eq!("class LoaderMock: Loader {\n}", expand_source(source).unwrap());
}

#[test]
fn multiple_mocks_keep_source_order() {
    let source = "
        @Mock protocol A {}
        @Mock protocol B {}
    ";

    assert_eq!(
        "class AMock: A {\n}\nclass BMock: B {\n}",
        expand_source(source).unwrap()
    );
}

#[test]
fn non_protocol_fails_with_location() {
    let source = "import Foundation

@Mock
struct Foo {}
";

    let err = expand_source(source).unwrap_err();

    match &err {
        Error::Diagnostic {
            diagnostic,
            location,
        } => {
            assert_eq!(Diagnostic::OnlyApplicableToProtocol, *diagnostic);
            assert_eq!(SourceLocation { line: 3, column: 0 }, *location);
        }
        Error::Parse(err) => panic!("Unexpected parse error: {err}"),
    }

    assert_eq!(
        Some(&Diagnostic::OnlyApplicableToProtocol),
        err.diagnostic()
    );
    assert_eq!(
        "3:0: '@Mock' can only be applied to a 'protocol'",
        err.to_string()
    );
}

#[test]
fn invalid_property_fails() {
    let source = "
        @Mock
        protocol Foo {
            var (x, y): Int { get }
        }
    ";

    assert_eq!(
        Some(&Diagnostic::VariableDeclInProtocolWithNotIdentifierPattern),
        expand_source(source).unwrap_err().diagnostic()
    );
}

#[test]
fn parse_error() {
    let err = expand_source("@Mock protocol Foo { init() }").unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn unrelated_swift_is_skipped() {
    let source = r#"@Mock protocol Service { func fetch() }  struct Greeter { let name: String; func greet() -> String { "Hello \(name)" } }

func `default`() {}
"#;

    assert_eq!(
        "class ServiceMock: Service {
    var fetchInvokedCount = 0
    var fetchInvoked: Bool {
        return fetchInvokedCount > 0
    }
    var fetchClosure: (() -> Void)?
    func fetch() {
        fetchInvokedCount += 1
        fetchClosure?()
    }
}",
        expand_source(source).unwrap()
    );
}
