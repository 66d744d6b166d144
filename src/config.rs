use anyhow::{Context, Result};
use markdown_builder::{LineEnding, RenderConfig, TableOptions};
use serde::Deserialize;
use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "mdb.json";

/// Top-level mdb.json schema.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MdbConfig {
    #[serde(default)]
    pub line_ending: LineEnding,

    /// Title-case the header of every table in a script.
    #[serde(default)]
    pub auto_format_headers: bool,
}

impl MdbConfig {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::with_line_ending(self.line_ending)
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            auto_format_headers: self.auto_format_headers,
        }
    }
}

/// Load config from `explicit`, or from `mdb.json` in `dir` if present, or
/// return defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<MdbConfig> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(CONFIG_FILE);
            if !candidate.exists() {
                tracing::debug!(dir = %dir.display(), "No config file, using defaults");
                return Ok(MdbConfig::default());
            }
            candidate
        }
    };

    let raw = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: MdbConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), ?config, "Loaded config");
    Ok(config)
}
