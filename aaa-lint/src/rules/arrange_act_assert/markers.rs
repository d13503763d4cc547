//! Marker classification and sequencing
//!
//!     A comment is a marker when its trimmed, lowercased text starts with `arrange`, `act` or
//!     `assert`. Prefixes are checked in that order. `// Act:`, `// ARRANGE the fixtures` and
//!     `// acting on it` all count; `/** act */` does not, its text starts with `*`.
//!
//!     The arrange prefix is matched on its stem, `arrang`, so the verb forms read naturally:
//!     `// arranging the data` marks the arrange phase just like `// arrange`.
//!
//!     Markers are accepted by a forward-only state machine:
//!
//!         nothing accepted    --arrange-->    arrange accepted
//!         arrange accepted    --act------>    act accepted
//!         act accepted        --assert--->    assert accepted
//!
//!     A marker arriving in any other state is skipped: it neither advances the machine nor
//!     resets it. A repeated `arrange`, an `assert` before `act` or a second full chain are all
//!     ignored, and the first well-ordered chain wins.

use crate::js::ast::Comment;

const ARRANGE_STEM: &str = "arrang";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Arrange,
    Act,
    Assert,
    Irrelevant,
}

impl Marker {
    pub fn classify(text: &str) -> Marker {
        let folded = text.trim().to_lowercase();
        if folded.starts_with(ARRANGE_STEM) {
            Marker::Arrange
        } else if folded.starts_with("act") {
            Marker::Act
        } else if folded.starts_with("assert") {
            Marker::Assert
        } else {
            Marker::Irrelevant
        }
    }
}

/// Which phases have been accepted so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseProgress {
    pub arrange_seen: bool,
    pub act_seen: bool,
    pub assert_seen: bool,
}

impl PhaseProgress {
    /// Feed one marker; returns whether it was accepted.
    pub fn accept(&mut self, marker: Marker) -> bool {
        let Self {
            arrange_seen,
            act_seen,
            assert_seen,
        } = *self;

        match marker {
            Marker::Arrange if !arrange_seen && !act_seen && !assert_seen => {
                self.arrange_seen = true;
                true
            }
            Marker::Act if arrange_seen && !act_seen && !assert_seen => {
                self.act_seen = true;
                true
            }
            Marker::Assert if arrange_seen && act_seen && !assert_seen => {
                self.assert_seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn accepted(&self) -> usize {
        [self.arrange_seen, self.act_seen, self.assert_seen]
            .iter()
            .filter(|seen| **seen)
            .count()
    }
}

/// The accepted chain of markers, in order; at most three comments.
pub fn accepted_chain(comments: &[Comment]) -> Vec<&Comment> {
    let mut progress = PhaseProgress::default();
    let chain: Vec<&Comment> = comments
        .iter()
        .filter(|comment| progress.accept(Marker::classify(&comment.text)))
        .collect();
    debug_assert_eq!(chain.len(), progress.accepted());
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js::ast::{CommentKind, Range};

    fn comments(texts: &[&str]) -> Vec<Comment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let mut range = Range::default();
                range.span = i * 10..i * 10 + 5;
                Comment::new(CommentKind::Line, *text, range)
            })
            .collect()
    }

    fn chain(texts: &[&str]) -> Vec<String> {
        let comments = comments(texts);
        accepted_chain(&comments)
            .into_iter()
            .map(|c| c.text.clone())
            .collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(Marker::classify(" arrange"), Marker::Arrange);
        assert_eq!(Marker::classify("Arrange"), Marker::Arrange);
        assert_eq!(Marker::classify(" ARRANGE:"), Marker::Arrange);
        assert_eq!(Marker::classify(" arranging the data"), Marker::Arrange);
        assert_eq!(Marker::classify(" arrange the data"), Marker::Arrange);
        assert_eq!(Marker::classify(" act "), Marker::Act);
        assert_eq!(Marker::classify(" acting"), Marker::Act);
        assert_eq!(Marker::classify(" Assert: result"), Marker::Assert);
        assert_eq!(Marker::classify(" assertion"), Marker::Assert);
        assert_eq!(Marker::classify("* act "), Marker::Irrelevant);
        assert_eq!(Marker::classify(" the act"), Marker::Irrelevant);
        assert_eq!(Marker::classify(""), Marker::Irrelevant);
    }

    #[test]
    fn test_in_order_chain() {
        assert_eq!(
            chain(&[" arrange", " act", " assert"]),
            vec![" arrange", " act", " assert"]
        );
    }

    #[test]
    fn test_irrelevant_comments_are_skipped() {
        assert_eq!(
            chain(&[" setup", " arrange", " note", " act", " eslint-disable", " assert"]),
            vec![" arrange", " act", " assert"]
        );
    }

    #[test]
    fn test_out_of_order_markers_do_not_advance() {
        assert_eq!(chain(&[" act", " assert", " arrange"]), vec![" arrange"]);
        assert_eq!(chain(&[" arrange", " assert", " act"]), vec![" arrange", " act"]);
    }

    #[test]
    fn test_repeated_markers_are_ignored() {
        assert_eq!(
            chain(&[" arrange", " arrange", " act", " assert"]),
            vec![" arrange", " act", " assert"]
        );
        assert_eq!(
            chain(&[" arrange", " act", " assert", " arrange", " act", " assert"]).len(),
            3
        );
    }

    #[test]
    fn test_progress_never_regresses() {
        let mut progress = PhaseProgress::default();
        assert!(!progress.accept(Marker::Act));
        assert!(progress.accept(Marker::Arrange));
        assert!(!progress.accept(Marker::Arrange));
        assert!(progress.accept(Marker::Act));
        assert!(!progress.accept(Marker::Irrelevant));
        assert!(progress.accept(Marker::Assert));
        assert!(!progress.accept(Marker::Assert));
        assert_eq!(progress.accepted(), 3);
    }
}
