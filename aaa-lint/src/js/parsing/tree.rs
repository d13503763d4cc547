//! Token tree
//!
//!     Groups the flat token stream by brackets. Each [TokenTree::Group] owns the tokens between
//!     its delimiters, so the call extraction can look at one bracket level at a time and treat
//!     nested groups as opaque units.

use super::ParseError;
use crate::js::lexing::Token;
use logos::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    fn of_open(token: Token) -> Option<Self> {
        match token {
            Token::LParen => Some(Delimiter::Paren),
            Token::LBracket => Some(Delimiter::Bracket),
            Token::LBrace => Some(Delimiter::Brace),
            _ => None,
        }
    }

    fn of_close(token: Token) -> Option<Self> {
        match token {
            Token::RParen => Some(Delimiter::Paren),
            Token::RBracket => Some(Delimiter::Bracket),
            Token::RBrace => Some(Delimiter::Brace),
            _ => None,
        }
    }

    pub fn open_char(&self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    pub fn close_char(&self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenTree {
    Leaf(Token, Span),
    Group(Group),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub delimiter: Delimiter,
    /// From the opening to the closing delimiter, both included
    pub span: Span,
    pub children: Vec<TokenTree>,
}

impl TokenTree {
    pub fn span(&self) -> Span {
        match self {
            TokenTree::Leaf(_, span) => span.clone(),
            TokenTree::Group(group) => group.span.clone(),
        }
    }

    pub fn token(&self) -> Option<Token> {
        match self {
            TokenTree::Leaf(token, _) => Some(*token),
            TokenTree::Group(_) => None,
        }
    }

    pub fn as_group(&self, delimiter: Delimiter) -> Option<&Group> {
        match self {
            TokenTree::Group(group) if group.delimiter == delimiter => Some(group),
            _ => None,
        }
    }

    /// True for an identifier leaf spelling `word`
    pub fn is_word(&self, word: &str, source: &str) -> bool {
        matches!(self, TokenTree::Leaf(Token::Identifier, span) if &source[span.clone()] == word)
    }
}

/// Build the token tree for a whole file.
///
/// Fails on the first unbalanced delimiter.
pub fn build(tokens: Vec<(Token, Span)>) -> Result<Vec<TokenTree>, ParseError> {
    // Stack of open groups: (delimiter, open span, children so far)
    let mut stack: Vec<(Delimiter, Span, Vec<TokenTree>)> = Vec::new();
    let mut root = Vec::new();

    for (token, span) in tokens {
        if let Some(delimiter) = Delimiter::of_open(token) {
            stack.push((delimiter, span, Vec::new()));
            continue;
        }

        let tree = if let Some(delimiter) = Delimiter::of_close(token) {
            let Some((open, open_span, children)) = stack.pop() else {
                return Err(ParseError::UnexpectedClose {
                    found: delimiter.close_char(),
                    offset: span.start,
                });
            };
            if open != delimiter {
                return Err(ParseError::MismatchedClose {
                    expected: open.close_char(),
                    found: delimiter.close_char(),
                    offset: span.start,
                });
            }
            TokenTree::Group(Group {
                delimiter,
                span: open_span.start..span.end,
                children,
            })
        } else {
            TokenTree::Leaf(token, span)
        };

        match stack.last_mut() {
            Some((_, _, children)) => children.push(tree),
            None => root.push(tree),
        }
    }

    if let Some((open, open_span, _)) = stack.pop() {
        return Err(ParseError::Unclosed {
            delimiter: open.open_char(),
            offset: open_span.start,
        });
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js::lexing::tokenize;

    fn tree(source: &str) -> Result<Vec<TokenTree>, ParseError> {
        build(tokenize(source).tokens)
    }

    #[test]
    fn test_nested_groups() {
        let source = "f(a, [b], { c })";
        let roots = tree(source).unwrap();

        assert_eq!(roots.len(), 2);
        assert!(roots[0].is_word("f", source));
        let call = roots[1].as_group(Delimiter::Paren).unwrap();
        assert_eq!(call.span, 1..16);
        assert_eq!(call.children.len(), 5);
        assert!(call.children[2].as_group(Delimiter::Bracket).is_some());
        assert!(call.children[4].as_group(Delimiter::Brace).is_some());
    }

    #[test]
    fn test_brackets_inside_strings_and_comments_are_ignored() {
        let source = "f(\"(\", /* ) */ '}') // {";
        let roots = tree(source).unwrap();
        assert_eq!(roots.len(), 2);
    }

    #[test]
    fn test_unclosed_group() {
        assert_eq!(
            tree("test('x', () => {"),
            Err(ParseError::Unclosed {
                delimiter: '{',
                offset: 16
            })
        );
    }

    #[test]
    fn test_mismatched_close() {
        assert_eq!(
            tree("f(]"),
            Err(ParseError::MismatchedClose {
                expected: ')',
                found: ']',
                offset: 2
            })
        );
    }

    #[test]
    fn test_stray_close() {
        assert_eq!(
            tree("a }"),
            Err(ParseError::UnexpectedClose {
                found: '}',
                offset: 2
            })
        );
    }
}
