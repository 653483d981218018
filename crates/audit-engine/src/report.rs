//! Plain-text findings summary for export

use serde::{Deserialize, Serialize};
use shared_types::{AuditFlag, AuditRule};

pub const REPORT_TITLE: &str = "DocuSafe Audit – Findings Summary";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportInput {
    pub file_name: Option<String>,
    pub rule: AuditRule,
    pub flags: Vec<AuditFlag>,
}

/// Render the header block followed by one numbered entry per flag
pub fn render_summary(input: &ReportInput) -> String {
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');
    if let Some(name) = input.file_name.as_deref().filter(|name| !name.is_empty()) {
        out.push_str(&format!("File: {}\n", name));
    }
    out.push_str(&format!("Rule: {}\n", input.rule.label()));
    out.push_str(&format!("Flags: {}\n", input.flags.len()));

    for (i, flag) in input.flags.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} [{}]\n{}\nExcerpt: {}\n",
            i + 1,
            flag.title,
            flag.severity,
            flag.message,
            flag.excerpt.trim()
        ));
    }

    out
}
