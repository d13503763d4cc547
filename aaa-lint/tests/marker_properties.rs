//! Property-based tests for marker classification and the accepted chain
//!
//! Bodies are generated as sequences of comments, some markers in varying case and with
//! trailing text, some noise, then linted as a single `test(...)` call.

use aaa_lint::rules::arrange_act_assert::markers::Marker;
use aaa_lint::Linter;
use proptest::prelude::*;

const NOISE: &[&str] = &["setup", "note: flaky", "eslint-disable-next-line", "given", "then", ""];

fn case_variant(word: &'static str) -> impl Strategy<Value = String> {
    (0..3usize, "[ :a-z]{0,8}").prop_map(move |(style, tail)| {
        let word = match style {
            0 => word.to_string(),
            1 => word.to_uppercase(),
            _ => {
                let mut chars = word.chars();
                let first = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or_default();
                format!("{}{}", first, chars.as_str())
            }
        };
        format!("{}{}", word, tail)
    })
}

fn noise() -> impl Strategy<Value = String> {
    prop::sample::select(NOISE).prop_map(str::to_string)
}

fn body(comments: &[String]) -> String {
    let mut source = String::from("test('generated', () => {\n");
    for comment in comments {
        source.push_str("  // ");
        source.push_str(comment);
        source.push_str("\n  step();\n");
    }
    source.push_str("});\n");
    source
}

proptest! {
    #[test]
    fn markers_match_any_case_and_suffix(
        arrange in case_variant("arrange"),
        act in case_variant("act"),
        assert in case_variant("assert"),
    ) {
        prop_assert_eq!(Marker::classify(&arrange), Marker::Arrange);
        prop_assert_eq!(Marker::classify(&act), Marker::Act);
        prop_assert_eq!(Marker::classify(&assert), Marker::Assert);
        prop_assert_eq!(Marker::classify(&format!("  {}  ", act)), Marker::Act);
    }

    #[test]
    fn ordered_chain_with_noise_is_valid(
        before in prop::collection::vec(noise(), 0..3),
        between_one in prop::collection::vec(noise(), 0..3),
        between_two in prop::collection::vec(noise(), 0..3),
        after in prop::collection::vec(noise(), 0..3),
        arrange in case_variant("arrange"),
        act in case_variant("act"),
        assert in case_variant("assert"),
    ) {
        let mut comments = before;
        comments.push(arrange);
        comments.extend(between_one);
        comments.push(act);
        comments.extend(between_two);
        comments.push(assert);
        comments.extend(after);

        let diagnostics = Linter::default().lint_source(&body(&comments)).unwrap();
        prop_assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    }

    #[test]
    fn at_most_one_report_per_test(
        comments in prop::collection::vec(
            prop_oneof![
                case_variant("arrange"),
                case_variant("act"),
                case_variant("assert"),
                noise(),
            ],
            0..10,
        )
    ) {
        let diagnostics = Linter::default().lint_source(&body(&comments)).unwrap();
        prop_assert!(diagnostics.len() <= 1);
    }

    #[test]
    fn no_arrange_means_everything_is_missing(
        comments in prop::collection::vec(
            prop_oneof![case_variant("act"), case_variant("assert"), noise()],
            0..8,
        )
    ) {
        let diagnostics = Linter::default().lint_source(&body(&comments)).unwrap();
        prop_assert_eq!(diagnostics.len(), 1);
        prop_assert_eq!(
            diagnostics[0].message.as_str(),
            "`arrange`, `act`, and `assert` comments are missing"
        );
        prop_assert_eq!(diagnostics[0].range.start.line, 0);
    }
}
