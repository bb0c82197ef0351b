//! Property-based tests for the slide compiler

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

/// A slide body with visible content and no separator or fence lines.
fn arb_body() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ,.]{0,30}".prop_map(|text| format!("# {text}\n\nsome content"))
}

fn arb_front_matter() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("gaia"), Just("default"), Just("uncover")],
        prop_oneof![Just("16:9"), Just("4:3")],
        any::<bool>(),
    )
        .prop_map(|(theme, size, paginate)| {
            format!("---\ntheme: {theme}\nsize: {size}\npaginate: {paginate}\n---\n")
        })
}

fn arb_document() -> impl Strategy<Value = (String, usize)> {
    (
        proptest::option::of(arb_front_matter()),
        proptest::collection::vec(arb_body(), 1..6),
    )
        .prop_map(|(front_matter, bodies)| {
            let count = bodies.len();
            let mut document = front_matter.unwrap_or_default();
            document.push_str(&bodies.join("\n\n---\n\n"));
            document.push('\n');
            (document, count)
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Record count equals the number of separator-delimited bodies.
    #[test]
    fn record_count_matches_body_count((document, count) in arb_document()) {
        let deck = compile(Some(&document));
        prop_assert_eq!(deck.len(), count);
    }

    /// Recompiling the same document yields a bit-identical deck.
    #[test]
    fn compilation_is_idempotent((document, _) in arb_document()) {
        prop_assert_eq!(compile(Some(&document)), compile(Some(&document)));
    }

    /// Indices are assigned by position from zero and all records share one
    /// stylesheet.
    #[test]
    fn indices_are_positional_and_styling_is_shared((document, _) in arb_document()) {
        let deck = compile(Some(&document));
        let slides = deck.slides();
        for (expected, slide) in slides.iter().enumerate() {
            prop_assert_eq!(slide.index, expected);
            prop_assert_eq!(&slide.styling, &slides[0].styling);
        }
    }

    /// Compilation never panics, whatever the input.
    #[test]
    fn compilation_is_total(document in ".{0,200}") {
        let _ = compile(Some(&document));
    }
}
