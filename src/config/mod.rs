use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::{Difficulty, Idea};

/// One entry in the known-tools table. Lookup is case-insensitive on `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownTool {
    pub name: String,
    pub purpose: String,
}

/// A fixed project idea appended when any of its trigger keywords appears
/// (case-insensitive substring test) in the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordIdea {
    pub keywords: Vec<String>,
    pub idea: Idea,
}

/// Static extraction tables. Defaults are compiled in; any table can be
/// replaced wholesale from ~/.tlx/config.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TlxConfig {
    /// Concept vocabulary, in ranking tie-break order.
    pub concept_vocabulary: Vec<String>,
    pub known_tools: Vec<KnownTool>,
    /// Action items appended to every report.
    pub action_boilerplate: Vec<String>,
    pub keyword_ideas: Vec<KeywordIdea>,
    /// Ideas appended to every report, after the keyword-gated ones.
    pub idea_boilerplate: Vec<Idea>,
}

impl Default for TlxConfig {
    fn default() -> Self {
        TlxConfig {
            concept_vocabulary: [
                "AI agents",
                "context engineering",
                "MCP",
                "claude code",
                "bash tool",
                "CLI",
                "workflow",
                "automation",
                "framework",
                "integration",
                "token",
                "prompt",
                "agent",
                "tool",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            known_tools: [
                ("gallery-dl", "Downloads images from galleries"),
                ("aria2", "Fast parallel downloader"),
                ("yt-dlp", "YouTube video downloader"),
                ("gitingest", "Converts repos to LLM-readable format"),
                ("click", "Python CLI framework"),
                ("claude code", "AI coding assistant"),
                ("cursor", "AI-powered code editor"),
            ]
            .iter()
            .map(|(name, purpose)| KnownTool {
                name: name.to_string(),
                purpose: purpose.to_string(),
            })
            .collect(),
            action_boilerplate: vec![
                "Create a claude.md file for your most common workflow".to_string(),
                "Build a simple CLI tool using Click framework".to_string(),
                "Test bash commands through Claude Code".to_string(),
            ],
            keyword_ideas: vec![
                KeywordIdea {
                    keywords: vec!["download".to_string()],
                    idea: Idea {
                        name: "Personal Download Manager".to_string(),
                        description: "Agent that organizes downloads by type and date".to_string(),
                        difficulty: Difficulty::Easy,
                        time_estimate: "1 hour".to_string(),
                    },
                },
                KeywordIdea {
                    keywords: vec!["git".to_string(), "repository".to_string()],
                    idea: Idea {
                        name: "Repository Documentation Agent".to_string(),
                        description: "Automatically extract and summarize repo documentation"
                            .to_string(),
                        difficulty: Difficulty::Medium,
                        time_estimate: "2-3 hours".to_string(),
                    },
                },
                KeywordIdea {
                    keywords: vec!["workflow".to_string()],
                    idea: Idea {
                        name: "Daily Workflow Automator".to_string(),
                        description: "Agent that handles repetitive daily tasks".to_string(),
                        difficulty: Difficulty::Medium,
                        time_estimate: "2 hours".to_string(),
                    },
                },
            ],
            idea_boilerplate: vec![
                Idea {
                    name: "Learning Notes Organizer".to_string(),
                    description: "Automatically organize and index learning materials".to_string(),
                    difficulty: Difficulty::Easy,
                    time_estimate: "1 hour".to_string(),
                },
                Idea {
                    name: "Code Snippet Manager".to_string(),
                    description: "Store and retrieve useful code snippets".to_string(),
                    difficulty: Difficulty::Easy,
                    time_estimate: "30 minutes".to_string(),
                },
            ],
        }
    }
}

impl TlxConfig {
    /// Load config from ~/.tlx/config.toml. Returns the built-in tables if
    /// the file doesn't exist; a present-but-invalid file is a hard error.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(TlxConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: TlxConfig =
            toml::from_str(&content).with_context(|| "Failed to parse config.toml")?;
        Ok(config)
    }

    /// Case-insensitive lookup into the known-tools table.
    pub fn known_tool_purpose(&self, name: &str) -> Option<&str> {
        let lower = name.to_lowercase();
        self.known_tools
            .iter()
            .find(|t| t.name.to_lowercase() == lower)
            .map(|t| t.purpose.as_str())
    }
}

/// Path to the config file: ~/.tlx/config.toml
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".tlx").join("config.toml"))
}
