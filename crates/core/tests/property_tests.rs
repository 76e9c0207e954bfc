use line_count_core::count_str;
use proptest::prelude::*;

/// Strings assembled from text runs, bare LFs and CR+LF pairs. Lone CRs
/// are deliberately excluded so that collapsing every CR+LF to LF is a
/// line-preserving rewrite.
fn terminator_fragments() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("\n".to_string()),
            Just("\r\n".to_string()),
            "[a-z ]{1,6}",
        ],
        0..32,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn char_count_equals_characters_consumed(content in "\\PC{0,500}") {
        let counts = count_str(&content);
        prop_assert_eq!(counts.chars, content.chars().count() as u64);
    }

    #[test]
    fn rescanning_is_idempotent(content in "\\PC{0,500}") {
        prop_assert_eq!(count_str(&content), count_str(&content));
    }

    #[test]
    fn trailing_line_bonus_is_exactly_zero_or_one(content in "\\PC{0,200}") {
        // Appending a terminator yields a sequence with no tail; appending
        // one more character after it yields a tail of exactly one line.
        let terminated = format!("{content}\n");
        let with_tail = format!("{content}\nx");
        prop_assert_eq!(
            count_str(&terminated).lines + 1,
            count_str(&with_tail).lines
        );
    }

    #[test]
    fn crlf_collapses_to_one_terminator(content in terminator_fragments()) {
        // Rewriting CR+LF to LF never changes the line count.
        let collapsed = content.replace("\r\n", "\n");
        prop_assert_eq!(count_str(&content).lines, count_str(&collapsed).lines);
    }

    #[test]
    fn consecutive_crlf_pairs_count_once_each(n in 0usize..64) {
        let content = "\r\n".repeat(n);
        let counts = count_str(&content);
        prop_assert_eq!(counts.lines, n as u64);
        prop_assert_eq!(counts.chars, 2 * n as u64);
    }

    #[test]
    fn content_without_terminators_is_one_line(content in "[a-z ]{1,100}") {
        let counts = count_str(&content);
        prop_assert_eq!(counts.lines, 1);
    }
}
