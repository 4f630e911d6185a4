//! Configuration loaded from `.gradebook/config.md`.
//!
//! The file is markdown with YAML frontmatter. Every key is optional and a
//! missing file means defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::name::NameAlphabet;
use crate::paths::CONFIG_FILE;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Default catalog path, used when `--catalog` is not given
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    #[serde(default)]
    pub alphabet: NameAlphabet,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogConfig {
    /// File that log output is appended to; stderr when unset
    #[serde(default = "default_log_file")]
    pub file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("subjects.csv")
}

fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("errors.log"))
}

fn default_log_level() -> String {
    "error".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            alphabet: NameAlphabet::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let Some(frontmatter) = extract_frontmatter(content) else {
            return Ok(Self::default());
        };

        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }
}

fn extract_frontmatter(content: &str) -> Option<String> {
    let mut lines = content.trim_start().lines();
    if lines.next()?.trim_end() != "---" {
        return None;
    }

    let mut body = Vec::new();
    for line in lines {
        if line.trim_end() == "---" {
            return Some(body.join("\n"));
        }
        body.push(line);
    }
    None
}
