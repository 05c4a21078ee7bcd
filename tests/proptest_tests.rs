//! Property-based tests for the viescheck crate.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(all(feature = "soap", feature = "report"))]

use proptest::prelude::*;

use viescheck::report::{pretty_print_xml, sanitize_name_component, wrap_line};
use viescheck::vat::normalize_vat_number;
use viescheck::vies::parse_check_vat_response;

proptest! {
    /// The normalizer only ever emits `A-Z0-9` and is idempotent.
    #[test]
    fn normalizer_output_alphabet_and_idempotence(input in ".*") {
        let normalized = normalize_vat_number(&input);
        prop_assert!(
            normalized.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "unexpected character in {normalized:?}"
        );
        prop_assert_eq!(normalize_vat_number(&normalized), normalized);
    }

    /// The filename component never leaves `A-Za-z0-9-`, never exceeds the
    /// length bound, and never ends up empty.
    #[test]
    fn sanitizer_alphabet_and_bounds(input in ".*") {
        let component = sanitize_name_component(Some(&input));
        prop_assert!(!component.is_empty());
        prop_assert!(component == "unknown" || component.chars().count() <= 30);
        prop_assert!(component.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }

    /// The parser is total: arbitrary bytes-as-text never panic and always
    /// produce a status message.
    #[test]
    fn parser_is_total(input in ".*") {
        let result = parse_check_vat_response(&input);
        prop_assert!(!result.status_message.is_empty());
    }

    /// Parsing is deterministic.
    #[test]
    fn parser_is_deterministic(input in ".*") {
        prop_assert_eq!(
            parse_check_vat_response(&input),
            parse_check_vat_response(&input)
        );
    }

    /// Wrapped pieces never exceed the requested width.
    #[test]
    fn wrap_respects_width(line in "[ -~]{0,300}", width in 5usize..120) {
        for piece in wrap_line(&line, width) {
            prop_assert!(piece.chars().count() <= width, "{piece:?} wider than {width}");
        }
    }

    /// Wrapping drops nothing but whitespace.
    #[test]
    fn wrap_preserves_content(line in "[!-~]{0,200}", width in 5usize..120) {
        // No spaces in the input, so the pieces concatenate back exactly.
        let rejoined: String = wrap_line(&line, width).concat();
        prop_assert_eq!(rejoined, line);
    }

    /// Pretty-printing never panics and is idempotent on its own output.
    #[test]
    fn pretty_print_is_total_and_idempotent(input in ".*") {
        let once = pretty_print_xml(&input);
        let twice = pretty_print_xml(&once);
        prop_assert_eq!(once, twice);
    }
}
