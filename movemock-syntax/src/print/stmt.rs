use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::stmt::{CodeBlock, Condition, Expr, IfStmt, Stmt};

use super::{impl_display_with_printer, write_separated, Printer};

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::DeclReference(name) => f.write_str(name),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::NilLiteral => f.write_str("nil"),
            Self::ArrayLiteral(elements) => {
                f.write_str("[")?;
                write_separated(f, elements, ", ")?;
                f.write_str("]")
            }
            Self::Tuple(elements) => {
                f.write_str("(")?;
                write_separated(f, elements, ", ")?;
                f.write_str(")")
            }
            Self::Infix { lhs, operator, rhs } => write!(f, "{lhs} {} {rhs}", operator.as_str()),
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_separated(f, arguments, ", ")?;
                f.write_str(")")
            }
            Self::MemberAccess { base, name } => write!(f, "{base}.{name}"),
            Self::OptionalChaining(expr) => write!(f, "{expr}?"),
            Self::ForceUnwrap(expr) => write!(f, "{expr}!"),
            Self::Await(expr) => write!(f, "await {expr}"),
            Self::Try(expr) => write!(f, "try {expr}"),
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Expr(expr) => expr.fmt(f),
            Self::OptionalBinding { name, value: None } => write!(f, "let {name}"),
            Self::OptionalBinding {
                name,
                value: Some(value),
            } => write!(f, "let {name} = {value}"),
        }
    }
}

impl Printer {
    pub(crate) fn code_block(&mut self, block: &CodeBlock) {
        for stmt in &block.statements {
            self.stmt(stmt);
        }
    }

    pub(crate) fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) => self.line(expr.to_string()),
            Stmt::Return(None) => self.line("return"),
            Stmt::Return(Some(expr)) => self.line(format!("return {expr}")),
            Stmt::Throw(expr) => self.line(format!("throw {expr}")),
            Stmt::If(stmt) => self.if_stmt(stmt),
        }
    }

    fn if_stmt(&mut self, stmt: &IfStmt) {
        let IfStmt {
            conditions,
            body,
            else_body,
        } = stmt;

        let conditions = conditions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        self.line(format!("if {conditions} {{"));
        self.indented(|p| p.code_block(body));

        if let Some(else_body) = else_body {
            self.line("} else {");
            self.indented(|p| p.code_block(else_body));
        }

        self.line("}");
    }
}

impl_display_with_printer!(Stmt, stmt);
impl_display_with_printer!(CodeBlock, code_block);
