//! The [`expansion`](self) module connects the mock synthesis to its host:
//! it recognizes the `@Mock` attribute, wraps the generated class behind an
//! optional preprocessor flag and expands whole source files.

use movemock_syntax::{render, Attribute, Decl, IfConfigDecl, SourceFile};
use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::error::Error;
use crate::extractor::extract_protocol_declaration;
use crate::factory::mock::class_declaration;

/// Arguments of the `@Mock` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MockAttribute {
    /// Name of the compilation condition the mock is hidden behind.
    pub behind_preprocessor_flag: Option<String>,
}

impl MockAttribute {
    pub const NAME: &'static str = "Mock";
    pub const FLAG_LABEL: &'static str = "behindPreprocessorFlag";

    /// Returns the parsed arguments if `attribute` is `@Mock`.
    ///
    /// A flag that is not a string literal is ignored.
    pub fn from_attribute(attribute: &Attribute) -> Option<Self> {
        if attribute.name != Self::NAME {
            return None;
        }

        let behind_preprocessor_flag = attribute
            .argument(Self::FLAG_LABEL)
            .and_then(|value| value.as_string_literal())
            .map(ToOwned::to_owned);

        Some(Self {
            behind_preprocessor_flag,
        })
    }

    /// Find the `@Mock` attribute in `attributes`.
    pub fn find(attributes: &[Attribute]) -> Option<Self> {
        attributes.iter().find_map(Self::from_attribute)
    }
}

/// Generate the peer declarations for a declaration annotated with `@Mock`.
///
/// # Errors
///
/// Fails with a [`Diagnostic`] if `declaration` is not a protocol or one of
/// its members cannot be mocked.
pub fn expansion(attribute: &MockAttribute, declaration: &Decl) -> Result<Vec<Decl>, Diagnostic> {
    let protocol = extract_protocol_declaration(declaration)?;
    let mock = Decl::Class(class_declaration(protocol)?);

    #[cfg(feature = "debug-to-file")]
    let name = format!("{}Mock", protocol.name);

    let decls = match &attribute.behind_preprocessor_flag {
        Some(flag) => {
            debug!(protocol = %protocol.name, %flag, "mock is behind preprocessor flag");

            vec![Decl::IfConfig(IfConfigDecl {
                condition: flag.clone(),
                elements: vec![mock],
            })]
        }
        None => vec![mock],
    };

    #[cfg(feature = "debug")]
    println!("\n@Mock:\n{}\n", render(&decls));

    #[cfg(feature = "debug-to-file")]
    let _ = debug_to_file(&render(&decls), &name);

    Ok(decls)
}

/// Parse `source`, expand every declaration annotated with `@Mock` and
/// render the generated declarations. Other declarations are only read as
/// far as needed to skip them.
///
/// # Errors
///
/// Returns [`Error::Parse`] if an annotated declaration cannot be parsed and
/// [`Error::Diagnostic`] with the location of the annotated declaration if
/// the expansion fails.
pub fn expand_source(source: &str) -> Result<String, Error> {
    let file = source.parse::<SourceFile>()?;

    let mut decls = Vec::new();
    for item in &file.items {
        let Some(attribute) = MockAttribute::find(item.decl.attributes()) else {
            continue;
        };

        debug!(
            declaration = item.decl.name().unwrap_or_default(),
            line = item.location.line,
            "expanding @{}",
            MockAttribute::NAME
        );

        let expanded =
            expansion(&attribute, &item.decl).map_err(|diagnostic| Error::Diagnostic {
                diagnostic,
                location: item.location,
            })?;

        decls.extend(expanded);
    }

    Ok(render(&decls))
}

#[cfg(feature = "debug-to-file")]
fn debug_to_file(code: &str, name: &str) -> std::io::Result<()> {
    use std::fs::{create_dir_all, write};
    use std::path::PathBuf;

    use convert_case::{Case, Casing};

    let path = PathBuf::from("./target/generated").join(format!("{}.swift", name.to_case(Case::Snake)));

    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    write(path, code)?;

    Ok(())
}
