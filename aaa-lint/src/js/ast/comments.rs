//! Comments and the per-file comment index
//!
//! Comments are not part of the syntax tree. The lexer collects them into a flat list, which is
//! frozen into a [`CommentIndex`] once per file and then only read.

use super::range::Range;
use std::ops::Range as ByteRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// A single comment
///
/// `text` is the payload between the delimiters, untrimmed: `// act` has the text `" act"`,
/// `/** x */` has the text `"* x "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
    pub range: Range,
}

impl Comment {
    pub fn new(kind: CommentKind, text: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }
}

/// All comments of a file, ordered by start offset
#[derive(Debug, Clone, Default)]
pub struct CommentIndex {
    comments: Vec<Comment>,
}

impl CommentIndex {
    pub fn new(mut comments: Vec<Comment>) -> Self {
        comments.sort_by_key(|comment| comment.range.span.start);
        Self { comments }
    }

    /// Comments lying entirely inside `span`, in textual order.
    ///
    /// Comments never overlap, so the result is a contiguous run of the index.
    pub fn comments_within(&self, span: &ByteRange<usize>) -> &[Comment] {
        let first = self
            .comments
            .partition_point(|comment| comment.range.span.start < span.start);
        let last = self
            .comments
            .partition_point(|comment| comment.range.span.end <= span.end);
        if last <= first {
            return &[];
        }
        &self.comments[first..last]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js::ast::range::Position;

    fn line_comment(text: &str, span: ByteRange<usize>) -> Comment {
        Comment::new(
            CommentKind::Line,
            text,
            Range::new(span, Position::default(), Position::default()),
        )
    }

    fn index() -> CommentIndex {
        // Deliberately unsorted
        CommentIndex::new(vec![
            line_comment(" b", 20..25),
            line_comment(" a", 5..10),
            line_comment(" c", 40..45),
        ])
    }

    fn texts(comments: &[Comment]) -> Vec<&str> {
        comments.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_index_is_sorted() {
        let texts: Vec<_> = index().iter().map(|c| c.text.clone()).collect();
        assert_eq!(texts, vec![" a", " b", " c"]);
    }

    #[test]
    fn test_comments_within_span() {
        let index = index();
        assert_eq!(texts(index.comments_within(&(0..100))), vec![" a", " b", " c"]);
        assert_eq!(texts(index.comments_within(&(15..45))), vec![" b", " c"]);
        assert_eq!(texts(index.comments_within(&(5..25))), vec![" a", " b"]);
    }

    #[test]
    fn test_partially_covered_comments_are_excluded() {
        let index = index();
        assert!(index.comments_within(&(7..22)).is_empty());
        assert_eq!(texts(index.comments_within(&(7..30))), vec![" b"]);
    }

    #[test]
    fn test_empty_span() {
        let index = index();
        assert!(index.comments_within(&(11..19)).is_empty());
        assert!(CommentIndex::default().comments_within(&(0..10)).is_empty());
    }
}
