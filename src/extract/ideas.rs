use crate::config::TlxConfig;
use crate::model::Idea;

/// Upper bound on suggested ideas.
const MAX_IDEAS: usize = 5;

/// Build the idea list: keyword-gated ideas in table order, then the
/// always-on boilerplate ideas. Construction order is the output order;
/// no ranking, no dedup.
pub fn generate(content: &str, config: &TlxConfig) -> Vec<Idea> {
    let content_lower = content.to_lowercase();
    let mut ideas = Vec::new();

    for entry in &config.keyword_ideas {
        if entry
            .keywords
            .iter()
            .any(|kw| content_lower.contains(&kw.to_lowercase()))
        {
            ideas.push(entry.idea.clone());
        }
    }

    ideas.extend(config.idea_boilerplate.iter().cloned());
    ideas.truncate(MAX_IDEAS);
    ideas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_keyword_leads() {
        let config = TlxConfig::default();
        let ideas = generate("we download things here", &config);
        assert_eq!(ideas[0].name, "Personal Download Manager");
        assert!(ideas.len() <= MAX_IDEAS);
    }

    #[test]
    fn boilerplate_only_without_keywords() {
        let config = TlxConfig::default();
        let ideas = generate("nothing relevant", &config);
        let names: Vec<&str> = ideas.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Learning Notes Organizer", "Code Snippet Manager"]);
    }

    #[test]
    fn all_keywords_hit_the_cap() {
        let config = TlxConfig::default();
        let ideas = generate("download the git workflow", &config);
        assert_eq!(ideas.len(), MAX_IDEAS);
        assert_eq!(ideas[0].name, "Personal Download Manager");
        assert_eq!(ideas[1].name, "Repository Documentation Agent");
        assert_eq!(ideas[2].name, "Daily Workflow Automator");
    }

    #[test]
    fn either_git_or_repository_triggers() {
        let config = TlxConfig::default();
        let ideas = generate("a repository of notes", &config);
        assert_eq!(ideas[0].name, "Repository Documentation Agent");
    }
}
