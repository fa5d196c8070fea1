//! Generated JS data modules.
//!
//! Each topic becomes `{topicId}_content.js` exporting `{topicId}_contentData`.

pub mod module;
pub mod writer;

pub use module::{deck_to_json, export_name, module_file_name, render_module, to_json_literal};
pub use writer::{ArtifactError, write_module};
