//! Call extraction
//!
//!     Walks the token tree and recovers every call expression. A parenthesized group is a call
//!     when the tree before it can end an expression that is being called:
//!
//!         test(...)           identifier callee
//!         it.only(...)        member callee           -> Callee::Other
//!         make()(...)         call result callee      -> Callee::Other
//!         fns[0](...)         computed member callee  -> Callee::Other
//!         test?.(...)         optional call           the callee is still `test`
//!         test<T>(...)        TypeScript type arguments, skipped
//!
//!     and is not one of the constructs that merely look like calls:
//!
//!         if (...) / while (...) / return (...)       keyword heads
//!         function name(...) / new Name(...)          declarations and constructions
//!         name(...) { ... }                           method definitions
//!         async (...) => ...                          arrow heads
//!
//!     Arguments are the top-level comma separated runs inside the group. Runs that form a
//!     complete function literal become [Argument::Function]; everything else is opaque.

use super::tree::{Delimiter, Group, TokenTree};
use crate::js::ast::{
    Argument, BlockStatement, CallExpression, Callee, FunctionBody, FunctionExpression,
    FunctionKind, SourceLocation,
};
use crate::js::lexing::Token;
use logos::Span;

/// Identifiers that never name a callee when followed by `(`
const NON_CALLEE_KEYWORDS: &[&str] = &[
    "if",
    "for",
    "while",
    "switch",
    "catch",
    "with",
    "return",
    "typeof",
    "void",
    "delete",
    "await",
    "yield",
    "in",
    "of",
    "instanceof",
    "new",
    "throw",
    "case",
    "do",
    "else",
    "function",
    "import",
];

/// Collect every call expression of a file, outer calls before the calls nested in them
pub fn extract(
    trees: &[TokenTree],
    source: &str,
    locations: &SourceLocation,
) -> Vec<CallExpression> {
    let mut extractor = Extractor {
        source,
        locations,
        calls: Vec::new(),
    };
    extractor.walk(trees);
    extractor.calls
}

struct Extractor<'a> {
    source: &'a str,
    locations: &'a SourceLocation,
    calls: Vec<CallExpression>,
}

impl Extractor<'_> {
    fn walk(&mut self, trees: &[TokenTree]) {
        for (index, tree) in trees.iter().enumerate() {
            let TokenTree::Group(group) = tree else {
                continue;
            };
            if group.delimiter == Delimiter::Paren {
                if let Some((start, callee)) = self.call_head(trees, index) {
                    let call = self.call_expression(callee, start, group);
                    self.calls.push(call);
                }
            }
            self.walk(&group.children);
        }
    }

    /// Callee and start offset when the paren group at `index` is an argument list
    fn call_head(&self, trees: &[TokenTree], index: usize) -> Option<(usize, Callee)> {
        match trees.get(index + 1) {
            Some(TokenTree::Leaf(Token::Arrow, _)) => return None,
            Some(TokenTree::Group(next)) if next.delimiter == Delimiter::Brace => return None,
            _ => {}
        }

        let mut head = self.type_arguments_start(trees, index).unwrap_or(index);
        let before_head = head.checked_sub(1).map(|i| &trees[i]);
        if matches!(before_head, Some(TokenTree::Leaf(Token::OptionalDot, _))) {
            head -= 1;
        }
        let previous = head.checked_sub(1).map(|i| &trees[i])?;

        match previous {
            TokenTree::Leaf(Token::Identifier, span) => {
                let name = &self.source[span.clone()];
                if NON_CALLEE_KEYWORDS.contains(&name) {
                    return None;
                }
                let before = head.checked_sub(2).map(|i| &trees[i]);
                match before {
                    Some(TokenTree::Leaf(Token::Dot | Token::OptionalDot, _)) => {
                        Some((span.start, Callee::Other))
                    }
                    Some(tree) if tree.is_word("function", self.source) => None,
                    Some(tree) if tree.is_word("new", self.source) => None,
                    _ if name == "super" => Some((span.start, Callee::Other)),
                    _ => Some((span.start, Callee::Identifier(name.to_string()))),
                }
            }
            TokenTree::Group(group) if group.delimiter != Delimiter::Brace => {
                Some((group.span.start, Callee::Other))
            }
            _ => None,
        }
    }

    /// Index of the `<` opening a type-argument list that ends right before `index`
    fn type_arguments_start(&self, trees: &[TokenTree], index: usize) -> Option<usize> {
        let last = index.checked_sub(1)?;
        if !self.is_punct(&trees[last], ">") {
            return None;
        }

        let mut depth = 0usize;
        for i in (0..=last).rev() {
            let tree = &trees[i];
            if self.is_punct(tree, ">") {
                depth += 1;
            } else if self.is_punct(tree, "<") {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            } else if !self.is_type_token(tree) {
                return None;
            }
        }
        None
    }

    /// Trees that may appear inside type arguments: `Map<string, () => void>`, `A | B[]`
    fn is_type_token(&self, tree: &TokenTree) -> bool {
        match tree {
            TokenTree::Group(_) => true,
            TokenTree::Leaf(Token::Punct, span) => {
                matches!(&self.source[span.clone()], "|" | "&" | "?" | ":")
            }
            TokenTree::Leaf(token, _) => matches!(
                token,
                Token::Identifier
                    | Token::Dot
                    | Token::Comma
                    | Token::Arrow
                    | Token::String
                    | Token::Number
                    | Token::Template
            ),
        }
    }

    fn call_expression(&self, callee: Callee, start: usize, group: &Group) -> CallExpression {
        let arguments = group
            .children
            .split(|tree| matches!(tree, TokenTree::Leaf(Token::Comma, _)))
            .filter(|run| !run.is_empty())
            .map(|run| self.argument(run))
            .collect();

        CallExpression {
            callee,
            arguments,
            range: self.locations.range(start..group.span.end),
        }
    }

    fn argument(&self, run: &[TokenTree]) -> Argument {
        let span = run_span(run);
        match self.function(run) {
            Some((kind, is_async, body)) => Argument::Function(FunctionExpression {
                kind,
                is_async,
                body,
                range: self.locations.range(span),
            }),
            None => Argument::Other(self.locations.range(span)),
        }
    }

    /// Recognize `[async] function [*] [name] (...) [: T] {...}` and `[async] params => body`
    fn function(&self, run: &[TokenTree]) -> Option<(FunctionKind, bool, FunctionBody)> {
        let is_async = run.len() > 1 && run[0].is_word("async", self.source);
        let rest = if is_async { &run[1..] } else { run };
        let head = rest.first()?;

        if head.is_word("function", self.source) {
            let body = self.function_expression_body(&rest[1..])?;
            return Some((FunctionKind::Expression, is_async, body));
        }

        let arrow = rest
            .iter()
            .position(|tree| matches!(tree, TokenTree::Leaf(Token::Arrow, _)))?;
        let params_ok = match head {
            TokenTree::Leaf(Token::Identifier, _) => arrow == 1,
            TokenTree::Group(group) if group.delimiter == Delimiter::Paren => {
                arrow == 1 || self.is_type_annotation(&rest[1..arrow])
            }
            _ => false,
        };
        if !params_ok {
            return None;
        }

        let body = match &rest[arrow + 1..] {
            [] => return None,
            [TokenTree::Group(group)] if group.delimiter == Delimiter::Brace => {
                FunctionBody::Block(self.block(group))
            }
            expression => FunctionBody::Expression(self.locations.range(run_span(expression))),
        };
        Some((FunctionKind::Arrow, is_async, body))
    }

    /// What follows the `function` keyword: `[*] [name] (...) [: T] {...}`
    fn function_expression_body(&self, run: &[TokenTree]) -> Option<FunctionBody> {
        let mut rest = run;
        if matches!(rest.first(), Some(tree) if self.is_punct(tree, "*")) {
            rest = &rest[1..];
        }
        if let Some(TokenTree::Leaf(Token::Identifier, _)) = rest.first() {
            rest = &rest[1..];
        }
        rest.first()?.as_group(Delimiter::Paren)?;

        let (body, between) = rest[1..].split_last()?;
        let body = body.as_group(Delimiter::Brace)?;
        if !between.is_empty() && !self.is_type_annotation(between) {
            return None;
        }
        Some(FunctionBody::Block(self.block(body)))
    }

    fn block(&self, group: &Group) -> BlockStatement {
        BlockStatement {
            range: self.locations.range(group.span.clone()),
        }
    }

    /// A TypeScript return type annotation, `: Promise<void>`
    fn is_type_annotation(&self, run: &[TokenTree]) -> bool {
        matches!(run.first(), Some(tree) if self.is_punct(tree, ":"))
    }

    fn is_punct(&self, tree: &TokenTree, text: &str) -> bool {
        matches!(tree, TokenTree::Leaf(Token::Punct, span) if &self.source[span.clone()] == text)
    }
}

fn run_span(run: &[TokenTree]) -> Span {
    match (run.first(), run.last()) {
        (Some(first), Some(last)) => first.span().start..last.span().end,
        _ => 0..0,
    }
}
