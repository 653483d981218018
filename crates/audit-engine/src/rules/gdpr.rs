use shared_types::{AuditFlag, AuditRule};

use super::RuleEvaluator;

/// GDPR compliance check. Placeholder until data-processing clause detection lands.
pub struct GdprRule;

impl RuleEvaluator for GdprRule {
    fn rule(&self) -> AuditRule {
        AuditRule::Gdpr
    }

    fn evaluate(&self, _text: &str) -> Vec<AuditFlag> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_nothing() {
        let text = "Processor may transfer personal data outside the EEA without safeguards.";
        assert!(GdprRule.evaluate(text).is_empty());
    }
}
