use shared_types::{AuditFlag, AuditRule};

use super::RuleEvaluator;

pub struct ObligationsRule;

impl RuleEvaluator for ObligationsRule {
    fn rule(&self) -> AuditRule {
        AuditRule::Obligations
    }

    // Obligation summaries are not produced yet
    fn evaluate(&self, _text: &str) -> Vec<AuditFlag> {
        Vec::new()
    }
}
