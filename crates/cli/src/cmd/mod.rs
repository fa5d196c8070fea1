pub mod convert;
pub mod doctor;
pub mod new;
pub mod save;

use std::path::Path;

use mdcards_core::config::loader::{ConfigLoader, default_config_path};
use mdcards_core::config::types::ResolvedConfig;

/// Load configuration and start logging, or report `FAIL mdc {command}` and exit.
pub fn load_config(config: Option<&Path>, profile: Option<&str>, command: &str) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc);
            rc
        }
        Err(e) => {
            println!("FAIL mdc {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
