use regex::Regex;

use crate::model::Concept;

/// How many ranked concepts to keep.
const MAX_CONCEPTS: usize = 10;

/// Scan for vocabulary terms and rank them by sentence-level mention count.
///
/// A "sentence" is a maximal run of non-period characters ending in a
/// period. Abbreviations and decimal points mis-segment; the heuristic
/// accepts that.
pub fn scan(content: &str, vocabulary: &[String]) -> Vec<Concept> {
    let content_lower = content.to_lowercase();
    let mut concepts = Vec::new();

    for term in vocabulary {
        // Cheap presence test before the sentence regex runs.
        if !content_lower.contains(&term.to_lowercase()) {
            continue;
        }

        let pattern = format!(r"(?i)[^.]*{}[^.]*\.", regex::escape(term));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };

        let sentences: Vec<&str> = re.find_iter(content).map(|m| m.as_str()).collect();
        if let Some(first) = sentences.first() {
            concepts.push(Concept {
                concept: term.clone(),
                mentions: sentences.len(),
                example: first.trim().to_string(),
            });
        }
    }

    // Stable sort: equal counts keep vocabulary order.
    concepts.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    concepts.truncate(MAX_CONCEPTS);
    concepts
}
