use shared_types::{AuditFlag, AuditRule};

use super::RuleEvaluator;

/// Dates and deadlines check. Not implemented yet; reports nothing so the
/// rule can still be offered and selected.
pub struct MissingDatesRule;

impl RuleEvaluator for MissingDatesRule {
    fn rule(&self) -> AuditRule {
        AuditRule::MissingDates
    }

    fn evaluate(&self, _text: &str) -> Vec<AuditFlag> {
        Vec::new()
    }
}
