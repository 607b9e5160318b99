pub mod json;
pub mod markdown;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::model::Learning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Markdown,
    Json,
    Both,
}

impl Format {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Some(Format::Markdown),
            "json" => Some(Format::Json),
            "both" => Some(Format::Both),
            _ => None,
        }
    }
}

/// Write the report artifacts. `md_path` names the markdown file; the JSON
/// sidecar lands beside it with the extension swapped.
pub fn write_report(learning: &Learning, md_path: &Path, format: Format) -> Result<()> {
    if let Some(parent) = md_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    if matches!(format, Format::Markdown | Format::Both) {
        let generated = chrono::Local::now().format("%Y-%m-%d").to_string();
        let report = markdown::render(learning, &generated);
        std::fs::write(md_path, report)
            .with_context(|| format!("Failed to write: {}", md_path.display()))?;
        info!("Wrote markdown report: {}", md_path.display());
        println!("Learning notes saved to: {}", md_path.display());
    }

    if matches!(format, Format::Json | Format::Both) {
        let json_path = md_path.with_extension("json");
        json::write_json(learning, &json_path)?;
        info!("Wrote JSON sidecar: {}", json_path.display());
        println!("JSON data saved to: {}", json_path.display());
    }

    Ok(())
}
