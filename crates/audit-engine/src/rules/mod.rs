//! Rule evaluators, one per `AuditRule`
//!
//! Dispatch is a closed `match`: adding a rule means adding an `AuditRule`
//! variant and an evaluator here, and the compiler flags the missing arm.

pub mod gdpr;
pub mod liability;
pub mod missing_dates;
pub mod obligations;

use shared_types::{AuditFlag, AuditRule};

pub use gdpr::GdprRule;
pub use liability::LiabilityRule;
pub use missing_dates::MissingDatesRule;
pub use obligations::ObligationsRule;

/// Common contract for every rule evaluator.
///
/// Implementations must be pure: the same text always yields the same flags
/// in the same order, sorted by `start`.
pub trait RuleEvaluator {
    fn rule(&self) -> AuditRule;
    fn evaluate(&self, text: &str) -> Vec<AuditFlag>;
}

/// Get the evaluator for a rule
pub fn evaluator_for(rule: AuditRule) -> &'static dyn RuleEvaluator {
    match rule {
        AuditRule::Liability => &LiabilityRule,
        AuditRule::MissingDates => &MissingDatesRule,
        AuditRule::Gdpr => &GdprRule,
        AuditRule::Obligations => &ObligationsRule,
    }
}

/// Run one rule over the full document text
pub fn evaluate(rule: AuditRule, text: &str) -> Vec<AuditFlag> {
    evaluator_for(rule).evaluate(text)
}
