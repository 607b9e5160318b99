use crate::model::Learning;

/// Concepts shown in the report (the JSON sidecar keeps all of them).
const REPORT_CONCEPTS: usize = 5;
/// Commands shown in the report's shell block.
const REPORT_COMMANDS: usize = 10;
/// Concept examples are quoted at most this many characters.
const EXAMPLE_CHARS: usize = 100;

/// Render the learning notes report. `generated` is the report date,
/// already formatted; the renderer itself touches no clocks.
pub fn render(learning: &Learning, generated: &str) -> String {
    let video_id = learning.metadata.video_id.as_deref().unwrap_or("unknown");
    let url = learning.metadata.url.as_deref().unwrap_or("N/A");

    let mut out = format!(
        "# 📚 Learning Notes: Video Analysis\n\
         **Generated**: {generated}\n\
         **Video ID**: {video_id}\n\
         **URL**: {url}\n\
         \n\
         ## 🎯 Key Concepts ({} found)\n",
        learning.key_concepts.len()
    );

    for concept in learning.key_concepts.iter().take(REPORT_CONCEPTS) {
        out.push_str(&format!(
            "- **{}** ({} mentions)\n",
            concept.concept, concept.mentions
        ));
        if !concept.example.is_empty() {
            let example: String = concept.example.chars().take(EXAMPLE_CHARS).collect();
            out.push_str(&format!("  - Example: \"{example}...\"\n"));
        }
    }

    out.push_str(&format!(
        "\n## 🛠️ Tools & Technologies ({} found)\n",
        learning.tools_mentioned.len()
    ));
    for tool in &learning.tools_mentioned {
        out.push_str(&format!("- **{}**: {}\n", tool.name, tool.purpose));
    }

    out.push_str(&format!(
        "\n## 💻 Commands to Try ({} found)\n```bash\n",
        learning.commands_shown.len()
    ));
    for cmd in learning.commands_shown.iter().take(REPORT_COMMANDS) {
        out.push_str(cmd);
        out.push('\n');
    }
    out.push_str("```\n");

    if !learning.workflows.is_empty() {
        out.push_str("\n## 📋 Workflows Identified\n");
        for workflow in &learning.workflows {
            out.push_str(&format!("### {}\n", workflow.name));
            for (i, step) in workflow.steps.iter().enumerate() {
                out.push_str(&format!("{}. {step}\n", i + 1));
            }
        }
    }

    out.push_str("\n## ✅ Action Items\n");
    for item in &learning.action_items {
        out.push_str(&format!("- [ ] {item}\n"));
    }

    out.push_str("\n## 💡 Implementation Ideas\n");
    for idea in &learning.implementation_ideas {
        out.push_str(&format!(
            "\n### {}\n- **Description**: {}\n- **Difficulty**: {}\n- **Time Estimate**: {}\n",
            idea.name,
            idea.description,
            idea.difficulty.as_str(),
            idea.time_estimate
        ));
    }

    out
}
