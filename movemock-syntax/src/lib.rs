//! Syntax tree, parser and printer for the subset of Swift declarations
//! `movemock` reads and writes.
//!
//! Every node implements [`syn::parse::Parse`] where it can appear in source
//! and [`Display`](std::fmt::Display) to print it back as Swift:
//!
//! ```
//! use movemock_syntax::ProtocolDecl;
//!
//! let decl: ProtocolDecl = syn::parse_str("protocol Service { func fetch() }").unwrap();
//!
//! assert_eq!(decl.to_string(), "protocol Service {\n    func fetch()\n}");
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
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod attribute;
pub mod decl;
pub mod parse;
pub mod print;
pub mod stmt;
pub mod types;

pub use attribute::{Attribute, AttributeArgument, AttributeValue, Modifier};
pub use decl::{
    AccessorBlock, AccessorDecl, AccessorKind, AssociatedTypeDecl, BindingKeyword, ClassDecl,
    Decl, DeclKind, FunctionDecl, FunctionSignature, GenericParameter, GenericParameterClause,
    GenericRequirement, IfConfigDecl, MemberDecl, OtherDecl, Parameter, Pattern, PatternBinding,
    ProtocolDecl, RequirementRelation, SourceFile, SourceItem, SourceLocation, VariableDecl,
};
pub use print::render;
pub use stmt::{BinaryOperator, CodeBlock, Condition, Expr, IfStmt, Stmt};
pub use types::{
    AttributedType, ConstraintSpecifier, EffectSpecifiers, FunctionType, IdentifierType,
    MemberType, ThrowsSpecifier, TupleTypeElement, TypeSyntax,
};
