use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::CodeBlock;

/// Untagged fences get this language. The transcripts this tool grew up on
/// are Python-heavy, so that is the assumed default.
const DEFAULT_LANGUAGE: &str = "python";

static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(\w*)\n(.*?)```").unwrap());

/// Extract fenced code regions. Blank bodies are skipped; line count is
/// over the trimmed body, so any kept block has at least one line.
pub fn scan(content: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();

    for cap in FENCE_RE.captures_iter(content) {
        let language = if cap[1].is_empty() {
            DEFAULT_LANGUAGE
        } else {
            &cap[1]
        };
        let code = cap[2].trim();
        if code.is_empty() {
            continue;
        }
        blocks.push(CodeBlock {
            language: language.to_string(),
            code: code.to_string(),
            lines: code.split('\n').count(),
        });
    }

    blocks
}
