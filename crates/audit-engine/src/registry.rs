//! Rule lookup by id or display label

use shared_types::{AuditRule, RuleOption};

/// Rule used when a selector does not match anything
pub const DEFAULT_RULE: AuditRule = AuditRule::Liability;

/// Find a rule by exact canonical id or exact display label
pub fn lookup(identifier: &str) -> Option<AuditRule> {
    AuditRule::ALL
        .iter()
        .copied()
        .find(|rule| rule.id() == identifier || rule.label() == identifier)
}

/// Resolve a caller-supplied selector. Unknown selectors fall back to
/// `DEFAULT_RULE` silently.
pub fn resolve(identifier: &str) -> AuditRule {
    lookup(identifier).unwrap_or(DEFAULT_RULE)
}

/// `{id, label}` pairs for every rule, in presentation order
pub fn rule_options() -> Vec<RuleOption> {
    AuditRule::ALL.iter().map(AuditRule::option).collect()
}
