//! Template syntax tree as seen by the extractor.
//!
//! The shapes mirror the Handlebars AST, reduced to what message extraction
//! needs. Lines are 1-based.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Content(String),
    Comment(String),
    /// `{{helper arg key=value}}`, escaped or raw.
    Mustache(Call),
    /// `{{#helper arg}}...{{else}}...{{/helper}}`
    Block(Block),
    /// Partials and decorators, `{{> name}}` or `{{* name}}`.
    Directive(Directive),
}

/// A helper invocation, either as a statement or as a sub-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub path: String,
    pub params: Vec<Expr>,
    pub hash: Vec<HashPair>,
    pub line: usize,
}

impl Call {
    pub fn new(path: impl Into<String>, params: Vec<Expr>, line: usize) -> Self {
        Self {
            path: path.into(),
            params,
            hash: Vec::new(),
            line,
        }
    }

    pub fn with_hash(mut self, key: impl Into<String>, value: Expr) -> Self {
        self.hash.push(HashPair {
            key: key.into(),
            value,
        });
        self
    }

    pub fn param(&self, index: usize) -> Option<&Expr> {
        self.params.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub call: Call,
    pub program: Option<Program>,
    pub inverse: Option<Program>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Partial,
    Decorator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub name: String,
    pub params: Vec<Expr>,
    pub hash: Vec<HashPair>,
    pub program: Option<Program>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashPair {
    pub key: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    String(String),
    /// Number literal in its source spelling.
    Number(String),
    Boolean(bool),
    Null,
    Undefined,
    Path(String),
    SubExpression(Box<Call>),
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Expr::String(value.into())
    }

    pub fn path(value: impl Into<String>) -> Self {
        Expr::Path(value.into())
    }

    pub fn sub(call: Call) -> Self {
        Expr::SubExpression(Box::new(call))
    }

    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Expr::String(value) => Some(value),
            _ => None,
        }
    }

    /// Text the expression was written as, if it has one.
    pub fn original(&self) -> Option<&str> {
        match self {
            Expr::String(value) | Expr::Number(value) | Expr::Path(value) => Some(value),
            Expr::Boolean(true) => Some("true"),
            Expr::Boolean(false) => Some("false"),
            Expr::Null | Expr::Undefined | Expr::SubExpression(_) => None,
        }
    }
}
