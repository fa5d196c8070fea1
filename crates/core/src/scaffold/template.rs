//! Markdown template for a new topic.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::deck::Visibility;
use crate::deck::config::DEFAULT_DESCRIPTION;
use crate::frontmatter;
use crate::ids::is_valid_topic_id;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("topic id '{0}' may only contain letters, digits, '_' and '-'")]
    InvalidTopicId(String),

    #[error("a title is required")]
    EmptyTitle,

    #[error("failed to render frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),

    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What the generated template should contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOptions {
    pub topic_id: String,
    pub title: String,
    pub description: String,
    pub header_text: String,
    pub footer_text: String,
    pub cover_visibility: Visibility,
    pub content_visibility: Visibility,
    pub num_cards: usize,
    pub include_main_text: bool,
}

impl TemplateOptions {
    pub fn new(topic_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            topic_id: topic_id.into(),
            title: title.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            header_text: String::new(),
            footer_text: String::new(),
            cover_visibility: Visibility::default(),
            content_visibility: Visibility::default(),
            num_cards: 1,
            include_main_text: true,
        }
    }
}

/// Render the markdown skeleton of a topic.
pub fn generate_markdown_template(opts: &TemplateOptions) -> Result<String, ScaffoldError> {
    let mut fields = Mapping::new();
    let mut set = |key: &str, value: Value| {
        fields.insert(Value::from(key), value);
    };
    set("topicId", Value::from(opts.topic_id.as_str()));
    set("title", Value::from(opts.title.as_str()));
    set("description", Value::from(opts.description.as_str()));
    set("headerText", Value::from(opts.header_text.as_str()));
    set("footerText", Value::from(opts.footer_text.as_str()));
    set("coverShowHeader", Value::from(opts.cover_visibility.show_header));
    set("coverShowFooter", Value::from(opts.cover_visibility.show_footer));
    set("contentDefaultShowHeader", Value::from(opts.content_visibility.show_header));
    set("contentDefaultShowFooter", Value::from(opts.content_visibility.show_footer));

    let mut body = format!("# {}\n\nCover subtitle\n\n", opts.title);
    for i in 1..=opts.num_cards {
        body.push_str("---\n\n");
        body.push_str(&format!("## Card {i} title\n\nCard {i} body\n\n"));
        body.push_str(&format!(
            "<!-- cardShowHeader: {} -->\n<!-- cardShowFooter: {} -->\n\n",
            opts.content_visibility.show_header, opts.content_visibility.show_footer
        ));
    }
    if opts.include_main_text {
        body.push_str("---\n\n## Main Text\n\nWrite the main post text here...\n");
    }

    Ok(frontmatter::serialize(&fields, &body)?)
}

/// Write a new template to `{dir}/{topic_id}.md`; never overwrites.
pub fn create_topic_file(dir: &Path, opts: &TemplateOptions) -> Result<PathBuf, ScaffoldError> {
    if !is_valid_topic_id(&opts.topic_id) {
        return Err(ScaffoldError::InvalidTopicId(opts.topic_id.clone()));
    }
    if opts.title.trim().is_empty() {
        return Err(ScaffoldError::EmptyTitle);
    }

    let text = generate_markdown_template(opts)?;
    fs::create_dir_all(dir)
        .map_err(|source| ScaffoldError::CreateDir { path: dir.to_path_buf(), source })?;

    let path = dir.join(format!("{}.md", opts.topic_id));
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Err(ScaffoldError::AlreadyExists(path));
        }
        Err(source) => return Err(ScaffoldError::Write { path, source }),
    };

    file.write_all(text.as_bytes())
        .map_err(|source| ScaffoldError::Write { path: path.clone(), source })?;
    Ok(path)
}
