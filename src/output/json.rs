use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Write any serializable value as pretty-printed JSON. serde_json keeps
/// non-ASCII characters unescaped, which is what the sidecar wants.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(())
}
