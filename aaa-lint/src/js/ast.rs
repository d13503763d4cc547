//! Syntax types handed from the front-end to the rules
//!
//! - [range] - byte spans and line:column positions
//! - [comments] - comments and the per-file comment index
//! - [nodes] - call expressions, their arguments and function bodies

pub mod comments;
pub mod nodes;
pub mod range;

pub use comments::{Comment, CommentIndex, CommentKind};
pub use nodes::{
    Argument, BlockStatement, CallExpression, Callee, FunctionBody, FunctionExpression,
    FunctionKind,
};
pub use range::{Position, Range, SourceLocation};
