//! New topic scaffolding.

pub mod template;

pub use template::{ScaffoldError, TemplateOptions, create_topic_file, generate_markdown_template};
