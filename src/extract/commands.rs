use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Upper bound on extracted commands.
const MAX_COMMANDS: usize = 20;
/// Anything this long is prose that happened to match, not a command.
const MAX_COMMAND_LEN: usize = 100;

static BACKTICK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:run|execute)\s+([a-z\-]+\s+[^\n]+)").unwrap());
static PROMPT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\$\s+(.+)$").unwrap());

/// Lexically capture command-like substrings: backtick spans, lines after
/// "run"/"execute", and dollar-prompt lines. No validation that a capture
/// is a real command.
pub fn scan(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut commands = Vec::new();

    for re in [&*BACKTICK_RE, &*RUN_RE, &*PROMPT_RE] {
        for cap in re.captures_iter(content) {
            let cmd = cap[1].trim().to_string();
            if cmd.chars().count() >= MAX_COMMAND_LEN {
                continue;
            }
            if seen.insert(cmd.clone()) {
                commands.push(cmd);
            }
        }
    }

    commands.truncate(MAX_COMMANDS);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_surface_patterns() {
        let text = "Use `yt-dlp --help` to start.\n\
                    Then run yt-dlp https://example.com in the shell.\n\
                    $ aria2c -x 16 file.iso\n";
        let cmds = scan(text);
        assert!(cmds.contains(&"yt-dlp --help".to_string()));
        assert!(cmds.contains(&"yt-dlp https://example.com in the shell.".to_string()));
        assert!(cmds.contains(&"aria2c -x 16 file.iso".to_string()));
    }

    #[test]
    fn dedup_preserves_first_seen_order() {
        let text = "`ls -la` and again `ls -la` then `pwd`\n$ ls -la\n";
        let cmds = scan(text);
        assert_eq!(cmds, vec!["ls -la".to_string(), "pwd".to_string()]);
    }

    #[test]
    fn length_bound_and_cap() {
        let long = format!("`{}`", "x".repeat(150));
        let mut text = long;
        for i in 0..30 {
            text.push_str(&format!("`cmd-{i}`\n"));
        }
        let cmds = scan(&text);
        assert!(cmds.len() <= MAX_COMMANDS);
        assert!(cmds.iter().all(|c| c.chars().count() < MAX_COMMAND_LEN));
        // Exact-value dedup means no repeats.
        let unique: HashSet<&String> = cmds.iter().collect();
        assert_eq!(unique.len(), cmds.len());
    }
}
