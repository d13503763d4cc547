//! Lexer
//!
//!     Tokenization runs logos over the source and splits the output in two: the significant
//!     tokens, which the token tree is built from, and the comments, which go to the comment
//!     index. Both keep the byte range of their source text.
//!
//! Regular expression literals
//!
//!     Whether `/` starts a regex or divides depends on the token before it, which a plain logos
//!     lexer cannot see. When a [Token::Slash] shows up where an expression may start, the rest
//!     of the literal is scanned by hand and the lexer bumped past it, so that `/\/\//` or
//!     `/"/` do not turn into comments or strings. The literal is reported as a single
//!     [Token::Slash] whose span covers the whole literal.
//!
//!     A `)` normally ends an expression, except when it closes the head of an `if`, `while`,
//!     `for` or `with` statement, so open parentheses are tracked with the keyword before them.
//!     After `<` a slash is division: in JSX that is a closing tag such as `</p>`.

pub mod tokens;

pub use tokens::Token;

use crate::js::ast::CommentKind;
use logos::{Logos, Span};

/// Output of [tokenize]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<(Token, Span)>,
    pub comments: Vec<(CommentKind, Span)>,
}

/// Keywords after which a `/` opens a regular expression literal
const EXPRESSION_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "case",
    "do",
    "else",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "instanceof",
    "yield",
    "await",
];

/// Keywords whose parenthesized head is followed by a statement
const STATEMENT_KEYWORDS: &[&str] = &["if", "while", "for", "with"];

/// Tokenize source code, separating comments from significant tokens
pub fn tokenize(source: &str) -> Lexed {
    let mut lexer = Token::lexer(source);
    if source.starts_with("#!") {
        lexer.bump(source.find('\n').unwrap_or(source.len()));
    }

    let mut lexed = Lexed::default();
    let mut previous: Option<(Token, Span)> = None;
    // One entry per open `(`: whether it heads a statement
    let mut paren_heads: Vec<bool> = Vec::new();
    let mut after_statement_head = false;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let token = match result {
            Ok(token) => token,
            Err(()) => {
                tracing::trace!(?span, text = lexer.slice(), "skipping unrecognized input");
                continue;
            }
        };

        match token {
            Token::LineComment => {
                lexed.comments.push((CommentKind::Line, span));
                continue;
            }
            Token::BlockComment => {
                lexed.comments.push((CommentKind::Block, span));
                continue;
            }
            Token::Slash if regex_allowed(previous.as_ref(), after_statement_head, source) => {
                if let Some(length) = regex_literal_len(&source[span.start..]) {
                    lexer.bump(length - span.len());
                    let literal = span.start..span.start + length;
                    lexed.tokens.push((Token::Slash, literal.clone()));
                    previous = Some((Token::Slash, literal));
                    after_statement_head = false;
                    continue;
                }
            }
            Token::LParen => paren_heads.push(is_statement_head(previous.as_ref(), source)),
            _ => {}
        }

        after_statement_head = token == Token::RParen && paren_heads.pop().unwrap_or(false);
        previous = Some((token, span.clone()));
        lexed.tokens.push((token, span));
    }

    lexed
}

/// Payload of a comment: the text between its delimiters
pub fn comment_text<'a>(kind: CommentKind, source: &'a str, span: &Span) -> &'a str {
    let raw = &source[span.clone()];
    match kind {
        CommentKind::Line => &raw[2..],
        CommentKind::Block => &raw[2..raw.len() - 2],
    }
}

fn is_statement_head(previous: Option<&(Token, Span)>, source: &str) -> bool {
    matches!(previous, Some((Token::Identifier, span))
        if STATEMENT_KEYWORDS.contains(&&source[span.clone()]))
}

fn regex_allowed(
    previous: Option<&(Token, Span)>,
    after_statement_head: bool,
    source: &str,
) -> bool {
    let Some((token, span)) = previous else {
        return true;
    };
    match token {
        Token::Identifier => EXPRESSION_KEYWORDS.contains(&&source[span.clone()]),
        Token::RParen => after_statement_head,
        Token::Punct => &source[span.clone()] != "<",
        Token::Number
        | Token::String
        | Token::Template
        | Token::RBracket
        | Token::Dot
        | Token::OptionalDot => false,
        // A previous regex literal; `/a/ / 2` is division
        Token::Slash => span.len() <= 2,
        _ => true,
    }
}

/// Length in bytes of the regex literal at the start of `rest`, flags included.
///
/// Returns `None` when the literal is not closed on the same line.
fn regex_literal_len(rest: &str) -> Option<usize> {
    let mut in_class = false;
    let mut escaped = false;

    for (offset, ch) in rest.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\n' | '\r' => return None,
            '\\' => escaped = true,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                let body_end = offset + 1;
                let flags = rest[body_end..]
                    .char_indices()
                    .find(|(_, c)| !c.is_ascii_alphanumeric())
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len() - body_end);
                return Some(body_end + flags);
            }
            _ => {}
        }
    }
    None
}
