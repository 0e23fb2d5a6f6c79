//! quizrun configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizrun configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizrunConfig {
    /// Bank file or directory used when `--bank` is not given.
    #[serde(default)]
    pub bank: Option<PathBuf>,
    /// Wait for Enter after each answer's feedback.
    #[serde(default = "default_true")]
    pub pause_after_answer: bool,
    /// Print explanations after answers and in the review.
    #[serde(default = "default_true")]
    pub show_explanations: bool,
}

fn default_true() -> bool {
    true
}

impl Default for QuizrunConfig {
    fn default() -> Self {
        Self {
            bank: None,
            pause_after_answer: true,
            show_explanations: true,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizrun.toml` in the current directory
/// 2. `~/.config/quizrun/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<QuizrunConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizrun.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizrunConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(?config, "loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(QuizrunConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizrun"))
}
