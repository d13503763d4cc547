//! Call-expression nodes
//!
//!     The front-end recovers one kind of node: the call expression. Its arguments are opaque
//!     ranges unless they are function literals, in which case the function body is kept so a
//!     rule can look at the comments inside it.

use super::range::Range;

/// What is being called
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// A plain identifier: `test(...)`
    Identifier(String),
    /// Member access, call results, parenthesized expressions: `it.each(...)`, `f()(...)`
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub callee: Callee,
    pub arguments: Vec<Argument>,
    /// From the start of the callee to the closing parenthesis
    pub range: Range,
}

impl CallExpression {
    /// The callee name when the callee is a plain identifier
    pub fn callee_name(&self) -> Option<&str> {
        match &self.callee {
            Callee::Identifier(name) => Some(name),
            Callee::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Function(FunctionExpression),
    Other(Range),
}

impl Argument {
    pub fn as_function(&self) -> Option<&FunctionExpression> {
        match self {
            Argument::Function(function) => Some(function),
            Argument::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `function () {}`, `async function* name() {}`
    Expression,
    /// `() => {}`, `async x => x`
    Arrow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionExpression {
    pub kind: FunctionKind,
    pub is_async: bool,
    pub body: FunctionBody,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionBody {
    Block(BlockStatement),
    /// Concise arrow body: `() => value`
    Expression(Range),
}

/// A `{ ... }` function body. The range includes both braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    pub range: Range,
}
