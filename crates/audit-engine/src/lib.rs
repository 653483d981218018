//! Clause audit engine
//!
//! Splits extracted contract text into offset-addressed sentences and runs
//! one audit rule over them, producing flags a caller can highlight in the
//! original text. Everything here is a pure function of its input.

pub mod patterns;
pub mod registry;
pub mod report;
pub mod rules;
pub mod segmenter;

use serde::{Deserialize, Serialize};
use shared_types::{AuditFlag, AuditRule, RuleOption};

pub use registry::{resolve, DEFAULT_RULE};
pub use report::{render_summary, ReportInput};
pub use rules::RuleEvaluator;
pub use segmenter::{split_into_sentences, Sentence};

/// Resolved rule plus the flags it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    pub rule: AuditRule,
    pub flags: Vec<AuditFlag>,
}

/// AuditEngine entry point
pub struct AuditEngine;

impl AuditEngine {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `selector` (id or label, unknown → liability) and audit `text`
    pub fn analyze(&self, text: &str, selector: &str) -> AuditResult {
        let rule = registry::resolve(selector);
        AuditResult {
            rule,
            flags: self.check_text(text, rule),
        }
    }

    /// Audit text with an already-resolved rule
    pub fn check_text(&self, text: &str, rule: AuditRule) -> Vec<AuditFlag> {
        rules::evaluate(rule, text)
    }

    pub fn supported_rules(&self) -> Vec<RuleOption> {
        registry::rule_options()
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}
