pub mod types;

pub use types::{AuditFlag, AuditFlagSeverity, AuditRule, RuleOption};
