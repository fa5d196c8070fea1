//! Frontmatter types and data structures.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

/// Represents parsed YAML frontmatter from a markdown document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Frontmatter {
    /// Raw value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field value when it is a YAML string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Parsed frontmatter (if a delimited block was present).
    pub frontmatter: Option<Frontmatter>,
    /// Everything after the closing delimiter line, verbatim.
    pub body: String,
}
