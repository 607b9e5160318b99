use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Workflow;

/// Placeholder name carried by every extracted workflow.
const WORKFLOW_NAME: &str = "Extracted Workflow";

static BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(?:workflow|process|steps?).*?:\s*\n((?:\d+\..*?\n)+)").unwrap());
static STEP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\s*(.+)").unwrap());

/// Find labeled numbered-list blocks and pull out their ordered steps.
/// A label with no parsable numbered lines yields no record.
pub fn scan(content: &str) -> Vec<Workflow> {
    let mut workflows = Vec::new();

    for cap in BLOCK_RE.captures_iter(content) {
        let steps: Vec<String> = STEP_RE
            .captures_iter(&cap[1])
            .map(|step| step[1].to_string())
            .collect();
        if !steps.is_empty() {
            workflows.push(Workflow {
                name: WORKFLOW_NAME.to_string(),
                steps,
            });
        }
    }

    workflows
}
