use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::config::TlxConfig;
use crate::model::Tool;

/// Loose naming patterns that surface tool-name candidates. Candidates
/// are filtered against the known-tools table afterward.
static CANDIDATE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\w+(?:dl|cli|agent)?)\s+(?:is\s+)?a\s+(?:command|tool|program)",
        r"(?i)tool\s+(?:called|named)\s+(\w+)",
        r"(?i)using\s+(\w+)\s+(?:tool|command|CLI)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Collect tool-name candidates and keep only those present in the
/// known-tools table. Closed vocabulary: anything not in the table is
/// dropped silently.
pub fn scan(content: &str, config: &TlxConfig) -> Vec<Tool> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for re in CANDIDATE_RES.iter() {
        for cap in re.captures_iter(content) {
            let name = cap[1].to_string();
            if seen.insert(name.clone()) {
                candidates.push(name);
            }
        }
    }

    candidates
        .into_iter()
        .filter_map(|name| {
            config.known_tool_purpose(&name).map(|purpose| Tool {
                name,
                purpose: purpose.to_string(),
                category: "CLI Tool".to_string(),
            })
        })
        .collect()
}
