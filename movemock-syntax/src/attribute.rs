/// `@name` or `@name(label: "value", other)`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    pub arguments: Option<Vec<AttributeArgument>>,
}

impl Attribute {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    /// Find the value of the argument with the passed `label`.
    pub fn argument(&self, label: &str) -> Option<&AttributeValue> {
        self.arguments
            .iter()
            .flatten()
            .find(|argument| argument.label.as_deref() == Some(label))
            .map(|argument| &argument.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeArgument {
    pub label: Option<String>,
    pub value: AttributeValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// Content of a string literal, without quotes.
    String(String),

    /// Any other argument, kept as written.
    Verbatim(String),
}

impl AttributeValue {
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Verbatim(_) => None,
        }
    }
}

/// Declaration modifier like `public`, `static` or `private(set)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub name: String,
    pub detail: Option<String>,
}

impl Modifier {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }
}
