use serde::{Deserialize, Serialize};

/// Header fields pulled from the transcript preamble. Every field is
/// optional; a transcript with no header is still a valid input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_date: Option<String>,
}

/// A vocabulary term found in the transcript, ranked by mention count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub concept: String,
    /// Number of sentence-level matches at extraction time.
    pub mentions: usize,
    /// First matching sentence, trimmed. May be empty.
    pub example: String,
}

/// A known tool mentioned in the transcript. Only produced for names
/// present in the known-tools table, never open extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub purpose: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    /// Steps in source order.
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
    pub lines: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A suggested small project keyed off keyword presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub time_estimate: String,
}

/// The aggregate result of one extraction run. Field names match the
/// JSON sidecar layout consumed by downstream note tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Learning {
    pub metadata: Metadata,
    pub key_concepts: Vec<Concept>,
    pub tools_mentioned: Vec<Tool>,
    pub commands_shown: Vec<String>,
    pub workflows: Vec<Workflow>,
    pub code_examples: Vec<CodeBlock>,
    pub action_items: Vec<String>,
    pub implementation_ideas: Vec<Idea>,
}
