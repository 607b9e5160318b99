use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::model::Tool;

/// Upper bound on the combined action-item list.
const MAX_ACTION_ITEMS: usize = 10;
/// How many top-ranked tools become "Install and test" items.
const TOOL_ITEMS: usize = 3;
/// Matches per suggestion pattern.
const MATCHES_PER_PATTERN: usize = 2;
/// Suggestion captures this long are prose, not actionable phrases.
const MAX_SUGGESTION_LEN: usize = 100;

static SUGGESTION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)you (?:should|can|could) (\w+[^.]+)",
        r"(?i)try (?:to\s+)?(\w+[^.]+)",
        r"(?i)(?:build|create|make) (?:a\s+)?(\w+[^.]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Derive a bounded task list: install items for the top tools, "Try to"
/// items from suggestion phrasing, plus the fixed boilerplate items.
pub fn generate(content: &str, tools: &[Tool], boilerplate: &[String]) -> Vec<String> {
    let mut items = Vec::new();

    for tool in tools.iter().take(TOOL_ITEMS) {
        items.push(format!("Install and test {}: {}", tool.name, tool.purpose));
    }

    for re in SUGGESTION_RES.iter() {
        for cap in re.captures_iter(content).take(MATCHES_PER_PATTERN) {
            let suggestion = &cap[1];
            if suggestion.chars().count() < MAX_SUGGESTION_LEN {
                items.push(format!("Try to {}", suggestion.trim()));
            }
        }
    }

    items.extend(boilerplate.iter().cloned());

    // First-seen-order dedup keeps output deterministic across runs.
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
    items.truncate(MAX_ACTION_ITEMS);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TlxConfig;

    fn boilerplate() -> Vec<String> {
        TlxConfig::default().action_boilerplate
    }

    #[test]
    fn boilerplate_survives_empty_input() {
        let items = generate("", &[], &boilerplate());
        assert_eq!(items, boilerplate());
    }

    #[test]
    fn tool_items_come_from_top_three() {
        let tools: Vec<Tool> = ["a", "b", "c", "d"]
            .iter()
            .map(|n| Tool {
                name: n.to_string(),
                purpose: format!("purpose-{n}"),
                category: "CLI Tool".to_string(),
            })
            .collect();
        let items = generate("", &tools, &boilerplate());
        assert!(items.contains(&"Install and test a: purpose-a".to_string()));
        assert!(items.contains(&"Install and test c: purpose-c".to_string()));
        assert!(!items.iter().any(|i| i.contains("Install and test d")));
    }

    #[test]
    fn suggestion_patterns_capped_per_pattern() {
        let text = "You should read the docs first. \
                    You can script this part. \
                    You could also automate everything.";
        let items = generate(text, &[], &boilerplate());
        let tries: Vec<&String> = items.iter().filter(|i| i.starts_with("Try to ")).collect();
        assert_eq!(tries.len(), 2);
        assert_eq!(tries[0], "Try to read the docs first");
    }

    #[test]
    fn capped_at_ten_and_unique() {
        let tools: Vec<Tool> = (0..3)
            .map(|i| Tool {
                name: format!("tool{i}"),
                purpose: "p".to_string(),
                category: "CLI Tool".to_string(),
            })
            .collect();
        let text = "You should alpha. Try beta. Build gamma. Create delta.";
        let items = generate(text, &tools, &boilerplate());
        assert!(items.len() <= MAX_ACTION_ITEMS);
        let unique: HashSet<&String> = items.iter().collect();
        assert_eq!(unique.len(), items.len());
    }
}
