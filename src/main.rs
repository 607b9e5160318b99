use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tlx::config::TlxConfig;
use tlx::extract;
use tlx::output::{self, Format};

#[derive(Parser)]
#[command(
    name = "tlx",
    version,
    about = "Transcript Learning Extractor — turn video transcripts into structured learning notes"
)]
struct Cli {
    /// Path to the transcript file
    transcript: PathBuf,

    /// Output path for the markdown notes (the JSON sidecar lands beside it)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Directory for generated notes when --output is not given
    #[arg(long, env = "TLX_NOTES_DIR", default_value = "learning_notes")]
    notes_dir: PathBuf,

    /// Output format: md, json, both
    #[arg(long, default_value = "both")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = Format::from_str(&cli.format)
        .with_context(|| format!("Unknown format: {}. Use: md, json, both", cli.format))?;

    let config = TlxConfig::load()?;

    println!("Analyzing transcript: {}", cli.transcript.display());
    let content = std::fs::read_to_string(&cli.transcript)
        .with_context(|| format!("Failed to read: {}", cli.transcript.display()))?;

    let learning = extract::extract_learning(&content, &config);

    let md_path = match cli.output {
        Some(path) => path,
        None => {
            let video_id = learning.metadata.video_id.as_deref().unwrap_or("unknown");
            let date = chrono::Local::now().format("%Y%m%d");
            cli.notes_dir.join(format!("{date}_{video_id}_notes.md"))
        }
    };

    output::write_report(&learning, &md_path, format)?;

    println!("\nExtraction Summary:");
    println!("  - Concepts found: {}", learning.key_concepts.len());
    println!("  - Tools identified: {}", learning.tools_mentioned.len());
    println!("  - Commands extracted: {}", learning.commands_shown.len());
    println!("  - Action items: {}", learning.action_items.len());
    println!(
        "  - Implementation ideas: {}",
        learning.implementation_ideas.len()
    );

    Ok(())
}
