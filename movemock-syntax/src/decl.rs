//! The [`decl`](self) module contains the declaration nodes of the syntax tree.
//!
//! Input (`protocol`) and output (`class`) declarations share the same member
//! nodes, so a function requirement can be copied into the mock and given a body.

use crate::attribute::{Attribute, Modifier};
use crate::stmt::{CodeBlock, Expr};
use crate::types::{EffectSpecifiers, TypeSyntax};

/// Any top level declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decl {
    Protocol(ProtocolDecl),
    Class(ClassDecl),
    Variable(VariableDecl),
    IfConfig(IfConfigDecl),
    Other(OtherDecl),
}

impl Decl {
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Self::Protocol(decl) => &decl.attributes,
            Self::Class(decl) => &decl.attributes,
            Self::Variable(decl) => &decl.attributes,
            Self::Other(decl) => &decl.attributes,
            Self::IfConfig(_) => &[],
        }
    }

    /// Name of the declared entity, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Protocol(decl) => Some(&decl.name),
            Self::Class(decl) => Some(&decl.name),
            Self::Other(decl) => Some(&decl.name),
            Self::Variable(decl) => decl.bindings.first().and_then(PatternBinding::name),
            Self::IfConfig(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProtocolDecl {
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub inheritance: Vec<TypeSyntax>,
    pub members: Vec<MemberDecl>,
}

impl ProtocolDecl {
    pub fn associated_types(&self) -> impl Iterator<Item = &AssociatedTypeDecl> {
        self.members.iter().filter_map(|member| match member {
            MemberDecl::AssociatedType(decl) => Some(decl),
            _ => None,
        })
    }

    pub fn variables(&self) -> impl Iterator<Item = &VariableDecl> {
        self.members.iter().filter_map(|member| match member {
            MemberDecl::Variable(decl) => Some(decl),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.members.iter().filter_map(|member| match member {
            MemberDecl::Function(decl) => Some(decl),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassDecl {
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub generic_parameters: Option<GenericParameterClause>,
    pub inheritance: Vec<TypeSyntax>,
    pub members: Vec<MemberDecl>,
}

/// `#if CONDITION ... #endif`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IfConfigDecl {
    pub condition: String,
    pub elements: Vec<Decl>,
}

/// Declaration the tree does not model in detail (`struct`, `enum`, `import`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OtherDecl {
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<Modifier>,
    pub kind: DeclKind,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Struct,
    Class,
    Enum,
    Actor,
    Extension,
    Function,
    Import,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Actor => "actor",
            Self::Extension => "extension",
            Self::Function => "func",
            Self::Import => "import",
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "struct" => Some(Self::Struct),
            "class" => Some(Self::Class),
            "enum" => Some(Self::Enum),
            "actor" => Some(Self::Actor),
            "extension" => Some(Self::Extension),
            "func" => Some(Self::Function),
            "import" => Some(Self::Import),
            _ => None,
        }
    }
}

/// Member of a protocol or class body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberDecl {
    AssociatedType(AssociatedTypeDecl),
    Variable(VariableDecl),
    Function(FunctionDecl),
}

impl From<VariableDecl> for MemberDecl {
    fn from(decl: VariableDecl) -> Self {
        Self::Variable(decl)
    }
}

impl From<FunctionDecl> for MemberDecl {
    fn from(decl: FunctionDecl) -> Self {
        Self::Function(decl)
    }
}

/// `associatedtype Key: Hashable = String`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssociatedTypeDecl {
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub inheritance: Vec<TypeSyntax>,
    pub default: Option<TypeSyntax>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingKeyword {
    Var,
    Let,
}

impl BindingKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariableDecl {
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<Modifier>,
    pub binding_keyword: BindingKeyword,
    pub bindings: Vec<PatternBinding>,
}

impl VariableDecl {
    /// Create a `var` declaration with a single binding.
    pub fn var(binding: PatternBinding) -> Self {
        Self {
            attributes: Vec::new(),
            modifiers: Vec::new(),
            binding_keyword: BindingKeyword::Var,
            bindings: vec![binding],
        }
    }

    pub fn has_single_binding(&self) -> bool {
        self.bindings.len() == 1
    }

    /// Returns a copy of this declaration with the accessor blocks of all
    /// bindings removed.
    #[must_use]
    pub fn without_accessors(&self) -> Self {
        Self {
            bindings: self
                .bindings
                .iter()
                .map(|binding| PatternBinding {
                    accessors: None,
                    ..binding.clone()
                })
                .collect(),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PatternBinding {
    pub pattern: Pattern,
    pub ty: Option<TypeSyntax>,
    pub initializer: Option<Expr>,
    pub accessors: Option<AccessorBlock>,
}

impl PatternBinding {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            pattern: Pattern::Identifier(name.into()),
            ty: None,
            initializer: None,
            accessors: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: TypeSyntax) -> Self {
        self.ty = Some(ty);
        self
    }

    #[must_use]
    pub fn with_initializer(mut self, initializer: Expr) -> Self {
        self.initializer = Some(initializer);
        self
    }

    #[must_use]
    pub fn with_accessors(mut self, accessors: AccessorBlock) -> Self {
        self.accessors = Some(accessors);
        self
    }

    /// Name of the binding if the pattern is a plain identifier.
    pub fn name(&self) -> Option<&str> {
        match &self.pattern {
            Pattern::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_identifier_pattern(&self) -> bool {
        matches!(self.pattern, Pattern::Identifier(_))
    }

    pub fn is_optional_type(&self) -> bool {
        self.ty.as_ref().is_some_and(TypeSyntax::is_optional)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Identifier(String),
    Wildcard,
    Tuple(Vec<Pattern>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessorBlock {
    /// `{ get set }` or `{ get { ... } set { ... } }`
    Accessors(Vec<AccessorDecl>),

    /// Implicit getter `{ return ... }`
    Getter(CodeBlock),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccessorDecl {
    pub modifier: Option<Modifier>,
    pub kind: AccessorKind,
    pub effects: EffectSpecifiers,
    pub body: Option<CodeBlock>,
}

impl AccessorDecl {
    pub fn new(kind: AccessorKind, body: Option<CodeBlock>) -> Self {
        Self {
            modifier: None,
            kind,
            effects: EffectSpecifiers::default(),
            body,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Get,
    Set,
}

impl AccessorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionDecl {
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub generic_parameters: Option<GenericParameterClause>,
    pub signature: FunctionSignature,
    pub where_clause: Vec<GenericRequirement>,
    pub body: Option<CodeBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FunctionSignature {
    pub parameters: Vec<Parameter>,
    pub effects: EffectSpecifiers,
    pub return_type: Option<TypeSyntax>,
}

/// Function parameter `first second: Type`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub first_name: String,
    pub second_name: Option<String>,
    pub ty: TypeSyntax,
}

impl Parameter {
    /// Argument label used at the call site, `None` for the wildcard `_`.
    pub fn external_label(&self) -> Option<&str> {
        (self.first_name != "_").then_some(self.first_name.as_str())
    }

    /// Name of the parameter inside the function body.
    pub fn internal_name(&self) -> &str {
        self.second_name.as_deref().unwrap_or(&self.first_name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GenericParameterClause {
    pub parameters: Vec<GenericParameter>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericParameter {
    pub name: String,
    pub inherited_type: Option<TypeSyntax>,
}

/// Requirement of a `where` clause.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericRequirement {
    pub left: TypeSyntax,
    pub relation: RequirementRelation,
    pub right: TypeSyntax,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequirementRelation {
    Conformance,
    SameType,
}

impl RequirementRelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conformance => ":",
            Self::SameType => " ==",
        }
    }
}

/// Position of a declaration in its source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// 1-based line
    pub line: usize,

    /// 0-based column
    pub column: usize,
}

/// A parsed source file: its declarations together with their locations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceFile {
    pub items: Vec<SourceItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceItem {
    pub location: SourceLocation,
    pub decl: Decl,
}
