use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::deck::ParseOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub parsing: ParseOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// One content project.
#[derive(Debug, Deserialize)]
pub struct Profile {
    pub project_root: String,
    /// Topic markdown sources.
    #[serde(default = "default_markdown_dir")]
    pub markdown_dir: String,
    /// Where generated `*_content.js` modules go.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    /// Topic index file (defaults to `topicsMeta.js` inside `content_dir`).
    pub meta_file: Option<String>,
}

fn default_markdown_dir() -> String {
    "{{project_root}}/src/markdown".to_string()
}

fn default_content_dir() -> String {
    "{{project_root}}/src/content".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub project_root: PathBuf,
    pub markdown_dir: PathBuf,
    pub content_dir: PathBuf,
    pub meta_file: PathBuf,
    pub parsing: ParseOptions,
    pub logging: LoggingConfig,
}
