//! Property-based tests for segmentation and rule evaluation
//!
//! Inputs are built from contract-like fragments so that terminators,
//! whitespace runs, keywords and multibyte characters show up often.

use audit_engine::{split_into_sentences, AuditEngine};
use proptest::prelude::*;
use shared_types::AuditRule;

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("liability".to_string()),
        Just("is unlimited".to_string()),
        Just("shall not exceed".to_string()),
        Just("cap on liability".to_string()),
        Just("hold harmless".to_string()),
        Just("without limit".to_string()),
        Just("no cap".to_string()),
        Just("Vendor".to_string()),
        Just("Müller–Straße".to_string()),
        Just("$10.50".to_string()),
        Just(".".to_string()),
        Just("!".to_string()),
        Just("?".to_string()),
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("\t".to_string()),
        "[a-zA-Z ,.!?\n]{0,12}",
    ]
}

fn contract_text() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..40).prop_map(|parts| parts.concat())
}

fn rule_value() -> impl Strategy<Value = AuditRule> {
    prop_oneof![
        Just(AuditRule::Liability),
        Just(AuditRule::MissingDates),
        Just(AuditRule::Gdpr),
        Just(AuditRule::Obligations),
    ]
}

proptest! {
    /// Sentences are contiguous, start at 0, and leave at most trailing whitespace uncovered
    #[test]
    fn sentences_partition_text(text in contract_text()) {
        let sentences = split_into_sentences(&text);

        if let Some(first) = sentences.first() {
            prop_assert_eq!(first.start, 0);
        }
        for pair in sentences.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        let covered = sentences.last().map_or(0, |s| s.end);
        prop_assert!(text[covered..].trim().is_empty());
    }

    /// Text that does not end in whitespace is covered completely
    #[test]
    fn sentences_cover_text_without_trailing_whitespace(text in contract_text()) {
        prop_assume!(!text.trim().is_empty());
        prop_assume!(!text.ends_with(char::is_whitespace));

        let sentences = split_into_sentences(&text);
        prop_assert_eq!(sentences.last().map(|s| s.end), Some(text.len()));
    }

    /// Every sentence value is exactly its slice of the original text
    #[test]
    fn sentence_values_match_offsets(text in contract_text()) {
        for (i, sentence) in split_into_sentences(&text).iter().enumerate() {
            prop_assert_eq!(&text[sentence.start..sentence.end], sentence.value);
            prop_assert_eq!(sentence.index, i);
        }
    }

    /// Trimmed slice at the flag offsets is the excerpt
    #[test]
    fn flag_offsets_reproduce_excerpt(text in contract_text()) {
        let engine = AuditEngine::new();
        for flag in engine.check_text(&text, AuditRule::Liability) {
            prop_assert_eq!(text[flag.start..flag.end].trim(), flag.excerpt.as_str());
        }
    }

    /// Flags come out in non-decreasing start order with unique ids
    #[test]
    fn flags_are_ordered(text in contract_text()) {
        let flags = AuditEngine::new().check_text(&text, AuditRule::Liability);

        for pair in flags.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start);
            prop_assert_ne!(&pair[0].id, &pair[1].id);
        }
    }

    /// Same input, same output
    #[test]
    fn evaluation_is_deterministic(text in contract_text(), rule in rule_value()) {
        let engine = AuditEngine::new();
        prop_assert_eq!(engine.check_text(&text, rule), engine.check_text(&text, rule));
    }

    /// Unrecognized selectors behave exactly like "liability"
    #[test]
    fn unknown_selector_matches_liability(text in contract_text(), selector in "[a-z]{3,12}-x") {
        let engine = AuditEngine::new();
        prop_assert_eq!(engine.analyze(&text, &selector), engine.analyze(&text, "liability"));
    }

    /// Whitespace-only input produces nothing for any rule
    #[test]
    fn blank_text_yields_nothing(text in "[ \t\n]{0,20}", rule in rule_value()) {
        prop_assert!(split_into_sentences(&text).is_empty());
        prop_assert!(AuditEngine::new().check_text(&text, rule).is_empty());
    }
}
