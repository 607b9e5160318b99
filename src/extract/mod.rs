pub mod actions;
pub mod code;
pub mod commands;
pub mod concepts;
pub mod ideas;
pub mod metadata;
pub mod tools;
pub mod workflows;

use tracing::info;

use crate::config::TlxConfig;
use crate::model::Learning;

/// Run every extractor over the transcript text and assemble the result.
///
/// Each extractor is a pure function of (text, static tables); they share
/// no state and no ordering except that the two generators consume the
/// tool list and the raw text respectively. Re-running on the same input
/// produces an identical `Learning`.
pub fn extract_learning(content: &str, config: &TlxConfig) -> Learning {
    let metadata = metadata::scan(content);
    let key_concepts = concepts::scan(content, &config.concept_vocabulary);
    let tools_mentioned = tools::scan(content, config);
    let commands_shown = commands::scan(content);
    let workflows = workflows::scan(content);
    let code_examples = code::scan(content);

    let action_items = actions::generate(content, &tools_mentioned, &config.action_boilerplate);
    let implementation_ideas = ideas::generate(content, config);

    info!(
        concepts = key_concepts.len(),
        tools = tools_mentioned.len(),
        commands = commands_shown.len(),
        workflows = workflows.len(),
        code_blocks = code_examples.len(),
        "extraction complete"
    );

    Learning {
        metadata,
        key_concepts,
        tools_mentioned,
        commands_shown,
        workflows,
        code_examples,
        action_items,
        implementation_ideas,
    }
}
