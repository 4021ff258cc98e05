//! Statements and expressions of generated function bodies.

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodeBlock {
    pub statements: Vec<Stmt>,
}

impl CodeBlock {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}

impl FromIterator<Stmt> for CodeBlock {
    fn from_iter<I: IntoIterator<Item = Stmt>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stmt {
    Expr(Expr),
    Return(Option<Expr>),
    Throw(Expr),
    If(IfStmt),
}

impl From<Expr> for Stmt {
    fn from(expr: Expr) -> Self {
        Self::Expr(expr)
    }
}

impl From<IfStmt> for Stmt {
    fn from(stmt: IfStmt) -> Self {
        Self::If(stmt)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IfStmt {
    pub conditions: Vec<Condition>,
    pub body: CodeBlock,
    pub else_body: Option<CodeBlock>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    Expr(Expr),

    /// `let name` or `let name = value`
    OptionalBinding { name: String, value: Option<Expr> },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    DeclReference(String),
    IntegerLiteral(u64),
    NilLiteral,
    ArrayLiteral(Vec<Expr>),
    Tuple(Vec<Expr>),
    Infix {
        lhs: Box<Expr>,
        operator: BinaryOperator,
        rhs: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    MemberAccess {
        base: Box<Expr>,
        name: String,
    },
    OptionalChaining(Box<Expr>),
    ForceUnwrap(Box<Expr>),
    Await(Box<Expr>),
    Try(Box<Expr>),
}

impl Expr {
    pub fn reference<S: Into<String>>(name: S) -> Self {
        Self::DeclReference(name.into())
    }

    #[must_use]
    pub fn infix(self, operator: BinaryOperator, rhs: Expr) -> Self {
        Self::Infix {
            lhs: Box::new(self),
            operator,
            rhs: Box::new(rhs),
        }
    }

    #[must_use]
    pub fn call(self, arguments: Vec<Expr>) -> Self {
        Self::Call {
            callee: Box::new(self),
            arguments,
        }
    }

    #[must_use]
    pub fn member<S: Into<String>>(self, name: S) -> Self {
        Self::MemberAccess {
            base: Box::new(self),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn optional_chained(self) -> Self {
        Self::OptionalChaining(Box::new(self))
    }

    #[must_use]
    pub fn force_unwrapped(self) -> Self {
        Self::ForceUnwrap(Box::new(self))
    }

    #[must_use]
    pub fn awaited(self) -> Self {
        Self::Await(Box::new(self))
    }

    #[must_use]
    pub fn tried(self) -> Self {
        Self::Try(Box::new(self))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Assign,
    AddAssign,
    NotEqual,
    Greater,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::NotEqual => "!=",
            Self::Greater => ">",
        }
    }
}
