use std::fmt::{Display, Formatter, Result as FmtResult, Write};

use crate::attribute::{Attribute, Modifier};
use crate::decl::{
    AccessorBlock, AccessorDecl, AssociatedTypeDecl, ClassDecl, Decl, DeclKind, FunctionDecl,
    GenericParameter, GenericParameterClause, GenericRequirement, IfConfigDecl, MemberDecl,
    OtherDecl, Parameter, Pattern, PatternBinding, ProtocolDecl, VariableDecl,
};
use crate::types::TypeSyntax;

use super::{impl_display_with_printer, write_separated, Printer};

impl Printer {
    pub(crate) fn decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Protocol(decl) => self.protocol_decl(decl),
            Decl::Class(decl) => self.class_decl(decl),
            Decl::Variable(decl) => self.variable_decl(decl),
            Decl::IfConfig(decl) => self.if_config_decl(decl),
            Decl::Other(decl) => self.other_decl(decl),
        }
    }

    pub(crate) fn protocol_decl(&mut self, decl: &ProtocolDecl) {
        let mut header = prefix(&decl.attributes, &decl.modifiers);
        let _ = write!(header, "protocol {}", decl.name);
        push_inheritance(&mut header, &decl.inheritance);

        self.block(header, |p| p.members(&decl.members));
    }

    pub(crate) fn class_decl(&mut self, decl: &ClassDecl) {
        let mut header = prefix(&decl.attributes, &decl.modifiers);
        let _ = write!(header, "class {}", decl.name);

        if let Some(generic_parameters) = &decl.generic_parameters {
            let _ = write!(header, "{generic_parameters}");
        }

        push_inheritance(&mut header, &decl.inheritance);

        self.block(header, |p| p.members(&decl.members));
    }

    pub(crate) fn if_config_decl(&mut self, decl: &IfConfigDecl) {
        self.line(format!("#if {}", decl.condition));

        for element in &decl.elements {
            self.decl(element);
        }

        self.line("#endif");
    }

    pub(crate) fn other_decl(&mut self, decl: &OtherDecl) {
        let mut header = prefix(&decl.attributes, &decl.modifiers);
        let _ = write!(header, "{} {}", decl.kind.as_str(), decl.name);

        match decl.kind {
            DeclKind::Import => self.line(header),
            DeclKind::Function => self.block(format!("{header}()"), |_| ()),
            _ => self.block(header, |_| ()),
        }
    }

    fn members(&mut self, members: &[MemberDecl]) {
        for member in members {
            self.member_decl(member);
        }
    }

    pub(crate) fn member_decl(&mut self, member: &MemberDecl) {
        match member {
            MemberDecl::AssociatedType(decl) => self.associated_type_decl(decl),
            MemberDecl::Variable(decl) => self.variable_decl(decl),
            MemberDecl::Function(decl) => self.function_decl(decl),
        }
    }

    pub(crate) fn associated_type_decl(&mut self, decl: &AssociatedTypeDecl) {
        let mut line = prefix(&decl.attributes, &decl.modifiers);
        let _ = write!(line, "associatedtype {}", decl.name);
        push_inheritance(&mut line, &decl.inheritance);

        if let Some(default) = &decl.default {
            let _ = write!(line, " = {default}");
        }

        self.line(line);
    }

    pub(crate) fn variable_decl(&mut self, decl: &VariableDecl) {
        let mut header = prefix(&decl.attributes, &decl.modifiers);
        header.push_str(decl.binding_keyword.as_str());
        header.push(' ');

        let Some((last, others)) = decl.bindings.split_last() else {
            self.line(header.trim_end());
            return;
        };

        for binding in others {
            push_binding_head(&mut header, binding);
            push_inline_accessors(&mut header, binding.accessors.as_ref());
            header.push_str(", ");
        }

        push_binding_head(&mut header, last);

        match &last.accessors {
            Some(accessors) if has_bodies(accessors) => {
                self.block(header, |p| p.accessor_block(accessors));
            }
            accessors => {
                push_inline_accessors(&mut header, accessors.as_ref());
                self.line(header);
            }
        }
    }

    fn accessor_block(&mut self, accessors: &AccessorBlock) {
        match accessors {
            AccessorBlock::Getter(body) => self.code_block(body),
            AccessorBlock::Accessors(accessors) => {
                for accessor in accessors {
                    let header = accessor_head(accessor);

                    match &accessor.body {
                        Some(body) => self.block(header, |p| p.code_block(body)),
                        None => self.line(header),
                    }
                }
            }
        }
    }

    pub(crate) fn function_decl(&mut self, decl: &FunctionDecl) {
        let FunctionDecl {
            attributes,
            modifiers,
            name,
            generic_parameters,
            signature,
            where_clause,
            body,
        } = decl;

        let mut header = prefix(attributes, modifiers);
        let _ = write!(header, "func {name}");

        if let Some(generic_parameters) = generic_parameters {
            let _ = write!(header, "{generic_parameters}");
        }

        header.push('(');
        header.push_str(&join(&signature.parameters, ", "));
        header.push(')');
        let _ = write!(header, "{}", signature.effects);

        if let Some(return_type) = &signature.return_type {
            let _ = write!(header, " -> {return_type}");
        }

        if !where_clause.is_empty() {
            let _ = write!(header, " where {}", join(where_clause, ", "));
        }

        match body {
            Some(body) => self.block(header, |p| p.code_block(body)),
            None => self.line(header),
        }
    }
}

fn prefix(attributes: &[Attribute], modifiers: &[Modifier]) -> String {
    let mut ret = String::new();

    for attribute in attributes {
        let _ = write!(ret, "{attribute} ");
    }

    for modifier in modifiers {
        let _ = write!(ret, "{modifier} ");
    }

    ret
}

fn push_inheritance(s: &mut String, inheritance: &[TypeSyntax]) {
    if !inheritance.is_empty() {
        let _ = write!(s, ": {}", join(inheritance, ", "));
    }
}

fn push_binding_head(s: &mut String, binding: &PatternBinding) {
    let _ = write!(s, "{}", binding.pattern);

    if let Some(ty) = &binding.ty {
        let _ = write!(s, ": {ty}");
    }

    if let Some(initializer) = &binding.initializer {
        let _ = write!(s, " = {initializer}");
    }
}

fn push_inline_accessors(s: &mut String, accessors: Option<&AccessorBlock>) {
    if let Some(AccessorBlock::Accessors(accessors)) = accessors {
        let accessors = accessors.iter().map(accessor_head).collect::<Vec<_>>();
        let _ = write!(s, " {{ {} }}", accessors.join(" "));
    }
}

fn has_bodies(accessors: &AccessorBlock) -> bool {
    match accessors {
        AccessorBlock::Getter(_) => true,
        AccessorBlock::Accessors(accessors) => accessors.iter().any(|a| a.body.is_some()),
    }
}

fn accessor_head(accessor: &AccessorDecl) -> String {
    let mut ret = String::new();

    if let Some(modifier) = &accessor.modifier {
        let _ = write!(ret, "{modifier} ");
    }

    let _ = write!(ret, "{}{}", accessor.kind.as_str(), accessor.effects);

    ret
}

fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::Wildcard => f.write_str("_"),
            Self::Tuple(patterns) => {
                f.write_str("(")?;
                write_separated(f, patterns, ", ")?;
                f.write_str(")")
            }
        }
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.first_name)?;

        if let Some(second_name) = &self.second_name {
            write!(f, " {second_name}")?;
        }

        write!(f, ": {}", self.ty)
    }
}

impl Display for GenericParameterClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("<")?;
        write_separated(f, &self.parameters, ", ")?;
        f.write_str(">")
    }
}

impl Display for GenericParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.name)?;

        if let Some(inherited_type) = &self.inherited_type {
            write!(f, ": {inherited_type}")?;
        }

        Ok(())
    }
}

impl Display for GenericRequirement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{} {}", self.left, self.relation.as_str(), self.right)
    }
}

impl_display_with_printer!(Decl, decl);
impl_display_with_printer!(ProtocolDecl, protocol_decl);
impl_display_with_printer!(ClassDecl, class_decl);
impl_display_with_printer!(IfConfigDecl, if_config_decl);
impl_display_with_printer!(OtherDecl, other_decl);
impl_display_with_printer!(MemberDecl, member_decl);
impl_display_with_printer!(AssociatedTypeDecl, associated_type_decl);
impl_display_with_printer!(VariableDecl, variable_decl);
impl_display_with_printer!(FunctionDecl, function_decl);
