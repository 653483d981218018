use crate::patterns::{contains_any, has_cap_language, has_unlimited_language, LIABILITY_KEYWORDS};
use crate::segmenter::{split_into_sentences, Sentence};
use shared_types::{AuditFlag, AuditFlagSeverity, AuditRule};

use super::RuleEvaluator;

pub const UNLIMITED_TITLE: &str = "Potentially unlimited liability";
pub const CLAUSE_TITLE: &str = "Liability / indemnity clause detected";

pub const UNCAPPED_MESSAGE: &str = "This clause appears to expose your side to broad or uncapped liability. \
A Senior Legal Ops Manager would typically push for a clear monetary cap and exclusions for indirect or consequential losses.";

pub const REVIEW_MESSAGE: &str = "This clause allocates liability or indemnity obligations. \
Review the cap, carve-outs, and scope of indemnity to ensure they align with your risk appetite.";

/// Flags sentences that allocate liability or indemnity, grading how exposed they look
pub struct LiabilityRule;

impl RuleEvaluator for LiabilityRule {
    fn rule(&self) -> AuditRule {
        AuditRule::Liability
    }

    fn evaluate(&self, text: &str) -> Vec<AuditFlag> {
        split_into_sentences(text)
            .iter()
            .filter_map(check_sentence)
            .collect()
    }
}

/// Severity priority chain: uncapped-only is high, capped-only is info,
/// anything else (both or neither) stays medium
pub fn classify(has_unlimited: bool, has_cap: bool) -> AuditFlagSeverity {
    let mut severity = AuditFlagSeverity::Medium;
    if has_unlimited && !has_cap {
        severity = AuditFlagSeverity::High;
    }
    if has_cap && !has_unlimited {
        severity = AuditFlagSeverity::Info;
    }
    severity
}

fn check_sentence(sentence: &Sentence<'_>) -> Option<AuditFlag> {
    let lower = sentence.value.to_lowercase();
    if !contains_any(&lower, LIABILITY_KEYWORDS) {
        return None;
    }

    let has_unlimited = has_unlimited_language(&lower);
    let has_cap = has_cap_language(&lower);

    let title = if has_unlimited {
        UNLIMITED_TITLE
    } else {
        CLAUSE_TITLE
    };
    let message = if has_unlimited && !has_cap {
        UNCAPPED_MESSAGE
    } else {
        REVIEW_MESSAGE
    };

    Some(AuditFlag {
        id: sentence.index.to_string(),
        rule: AuditRule::Liability,
        title: title.to_string(),
        message: message.to_string(),
        severity: classify(has_unlimited, has_cap),
        start: sentence.start,
        end: sentence.end,
        excerpt: sentence.trimmed().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn check(text: &str) -> Vec<AuditFlag> {
        LiabilityRule.evaluate(text)
    }

    #[test]
    fn test_unlimited_liability_is_high() {
        let flags = check("Vendor's liability under this agreement is unlimited.");

        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].severity, AuditFlagSeverity::High);
        assert_eq!(flags[0].title, UNLIMITED_TITLE);
        assert_eq!(flags[0].message, UNCAPPED_MESSAGE);
    }

    #[test]
    fn test_cap_on_liability_is_info() {
        let flags = check("There is a cap on liability of $10,000.");

        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].severity, AuditFlagSeverity::Info);
        assert_eq!(flags[0].title, CLAUSE_TITLE);
        assert_eq!(flags[0].message, REVIEW_MESSAGE);
    }

    #[test]
    fn test_plain_keyword_hit_is_medium() {
        let flags = check("The parties agree to standard liability terms.");

        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].severity, AuditFlagSeverity::Medium);
        assert_eq!(flags[0].title, CLAUSE_TITLE);
    }

    #[test]
    fn test_no_keyword_no_flag() {
        assert!(check("The weather today is sunny.").is_empty());
    }

    #[test]
    fn test_unlimited_and_capped_stays_medium() {
        let flags = check("Liability is unlimited for fraud, otherwise liability shall not exceed fees paid.");

        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].severity, AuditFlagSeverity::Medium);
        assert_eq!(flags[0].title, UNLIMITED_TITLE);
        assert_eq!(flags[0].message, REVIEW_MESSAGE);
    }

    #[test]
    fn test_shall_not_exceed_after_liability_is_capped() {
        let flags = check("Supplier's aggregate liability shall not exceed the fees paid.");
        assert_eq!(flags[0].severity, AuditFlagSeverity::Info);
    }

    #[test]
    fn test_cap_phrase_before_liability_is_not_a_cap() {
        let flags = check("Fees shall not exceed $100 and each party bears its own liability.");
        assert_eq!(flags[0].severity, AuditFlagSeverity::Medium);
    }

    #[test]
    fn test_cap_does_not_cross_sentences() {
        let text = "Each party accepts liability. Invoices shall not exceed the budget.";
        let flags = check(text);

        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].severity, AuditFlagSeverity::Medium);
    }

    #[test]
    fn test_without_limit_is_unlimited() {
        let flags = check("Customer shall indemnify Vendor without   limitation.");
        assert_eq!(flags[0].severity, AuditFlagSeverity::High);
    }

    #[test]
    fn test_no_cap_is_unlimited() {
        let flags = check("There is no cap on the indemnification obligations.");
        assert_eq!(flags[0].severity, AuditFlagSeverity::High);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let flags = check("HOLD HARMLESS AND INDEMNIFY THE LICENSOR.");
        assert_eq!(flags.len(), 1);
    }

    #[test]
    fn test_offsets_and_excerpt_follow_sentence() {
        let text = "Payment terms apply.\n  Vendor shall indemnify Customer.  Nothing else.";
        let flags = check(text);

        assert_eq!(flags.len(), 1);
        let flag = &flags[0];
        assert_eq!(flag.id, "1");
        assert_eq!(flag.start, "Payment terms apply.".len());
        assert_eq!(&text[flag.start..flag.end], "\n  Vendor shall indemnify Customer.");
        assert_eq!(flag.excerpt, "Vendor shall indemnify Customer.");
        assert_eq!(flag.rule, AuditRule::Liability);
    }

    #[test]
    fn test_ids_follow_sentence_index() {
        let text = "Liability applies. Weather is fine. Indemnification applies.";
        let ids: Vec<String> = check(text).into_iter().map(|flag| flag.id).collect();
        assert_eq!(ids, vec!["0", "2"]);
    }

    #[test]
    fn test_classify_table() {
        assert_eq!(classify(false, false), AuditFlagSeverity::Medium);
        assert_eq!(classify(true, false), AuditFlagSeverity::High);
        assert_eq!(classify(false, true), AuditFlagSeverity::Info);
        assert_eq!(classify(true, true), AuditFlagSeverity::Medium);
    }
}
