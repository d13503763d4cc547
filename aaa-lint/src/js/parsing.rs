//! Parser
//!
//!     Turns source text into a [Program]: the call expressions of the file plus its comment
//!     index. See the [js module](crate::js) for the pipeline.

pub mod calls;
pub mod tree;

use crate::js::ast::{CallExpression, Comment, CommentIndex, SourceLocation};
use crate::js::lexing::{self, comment_text};
use thiserror::Error;

/// The only failures of the front-end are unbalanced brackets.
///
/// Offsets are bytes into the source; callers with a [SourceLocation] turn them into positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unclosed `{delimiter}`")]
    Unclosed { delimiter: char, offset: usize },
    #[error("expected `{expected}` but found `{found}`")]
    MismatchedClose {
        expected: char,
        found: char,
        offset: usize,
    },
    #[error("unexpected `{found}`")]
    UnexpectedClose { found: char, offset: usize },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Unclosed { offset, .. }
            | ParseError::MismatchedClose { offset, .. }
            | ParseError::UnexpectedClose { offset, .. } => *offset,
        }
    }
}

/// A parsed source file
#[derive(Debug, Clone)]
pub struct Program {
    /// Every call expression, in source order of their argument lists
    pub calls: Vec<CallExpression>,
    pub comments: CommentIndex,
}

/// Parse a JavaScript or TypeScript source text
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let locations = SourceLocation::new(source);
    let lexed = lexing::tokenize(source);
    tracing::trace!(
        tokens = lexed.tokens.len(),
        comments = lexed.comments.len(),
        "tokenized"
    );

    let comments = lexed
        .comments
        .iter()
        .map(|(kind, span)| {
            Comment::new(
                *kind,
                comment_text(*kind, source, span),
                locations.range(span.clone()),
            )
        })
        .collect();

    let trees = tree::build(lexed.tokens)?;
    let calls = calls::extract(&trees, source, &locations);

    Ok(Program {
        calls,
        comments: CommentIndex::new(comments),
    })
}
