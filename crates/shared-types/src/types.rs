/// Audit rules a caller can select. Each maps to exactly one evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditRule {
    Liability,
    MissingDates,
    Gdpr,
    Obligations,
}

impl AuditRule {
    /// All rules, in presentation order
    pub const ALL: [AuditRule; 4] = [
        AuditRule::Liability,
        AuditRule::MissingDates,
        AuditRule::Gdpr,
        AuditRule::Obligations,
    ];

    /// Canonical identifier, e.g. "missing-dates"
    pub fn id(&self) -> &'static str {
        match self {
            AuditRule::Liability => "liability",
            AuditRule::MissingDates => "missing-dates",
            AuditRule::Gdpr => "gdpr",
            AuditRule::Obligations => "obligations",
        }
    }

    /// Human-readable label shown in rule pickers and reports
    pub fn label(&self) -> &'static str {
        match self {
            AuditRule::Liability => "Identify High-Risk Liability Clauses",
            AuditRule::MissingDates => "Find Missing Dates/Deadlines",
            AuditRule::Gdpr => "GDPR Compliance Check",
            AuditRule::Obligations => "Summarize Key Obligations",
        }
    }

    pub fn option(&self) -> RuleOption {
        RuleOption {
            id: *self,
            label: self.label().to_string(),
        }
    }
}

impl std::fmt::Display for AuditRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuleOption {
    pub id: AuditRule,
    pub label: String,
}

/// Ordered by risk for display only
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AuditFlagSeverity {
    Info,
    Medium,
    High,
}

impl AuditFlagSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditFlagSeverity::Info => "info",
            AuditFlagSeverity::Medium => "medium",
            AuditFlagSeverity::High => "high",
        }
    }
}

impl std::fmt::Display for AuditFlagSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuditFlag {
    pub id: String, // Sentence index, unique per evaluation run
    pub rule: AuditRule,
    pub title: String,
    pub message: String,
    pub severity: AuditFlagSeverity,
    pub start: usize, // Byte offset of the triggering sentence in the full text
    pub end: usize,   // Exclusive end offset (untrimmed)
    pub excerpt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_serializes_as_kebab_id() {
        let json = serde_json::to_string(&AuditRule::MissingDates).unwrap();
        assert_eq!(json, "\"missing-dates\"");

        let rule: AuditRule = serde_json::from_str("\"gdpr\"").unwrap();
        assert_eq!(rule, AuditRule::Gdpr);
    }

    #[test]
    fn test_rule_ids_match_serde_names() {
        for rule in AuditRule::ALL {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule.id()));
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(AuditFlagSeverity::Info < AuditFlagSeverity::Medium);
        assert!(AuditFlagSeverity::Medium < AuditFlagSeverity::High);
    }

    #[test]
    fn test_flag_json_shape() {
        let flag = AuditFlag {
            id: "0".to_string(),
            rule: AuditRule::Liability,
            title: "Liability / indemnity clause detected".to_string(),
            message: "msg".to_string(),
            severity: AuditFlagSeverity::Medium,
            start: 0,
            end: 10,
            excerpt: "Liability.".to_string(),
        };

        let value = serde_json::to_value(&flag).unwrap();
        assert_eq!(value["rule"], "liability");
        assert_eq!(value["severity"], "medium");
        assert_eq!(value["start"], 0);
        assert_eq!(value["end"], 10);
    }
}
