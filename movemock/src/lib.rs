//! `movemock` generates test doubles for Swift protocols.
//!
//! For a protocol annotated with `@Mock` a class `<Name>Mock` is synthesized
//! that records every call (count, arguments, history) and lets the test
//! stub errors, closures, return values and property values.
//!
//! ```
//! let source = r#"
//!     @Mock
//!     protocol Service {
//!         func fetch()
//!     }
//! "#;
//!
//! let mock = movemock::expand_source(source).unwrap();
//!
//! assert!(mock.starts_with("class ServiceMock: Service {"));
//! assert!(mock.contains("var fetchInvokedCount = 0"));
//! ```

#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod diagnostics;
pub mod error;
pub mod expansion;
pub mod extractor;
pub mod factory;

mod misc;

pub use diagnostics::{Diagnostic, DiagnosticId, Severity};
pub use error::Error;
pub use expansion::{expand_source, expansion, MockAttribute};
pub use extractor::extract_protocol_declaration;
pub use factory::mock::class_declaration;
