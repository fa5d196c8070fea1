use std::path::Path;

use mdcards_core::config::loader::default_config_path;
use mdcards_core::sources::discover_sources;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = super::load_config(config, profile, "doctor");
    tracing::debug!("Resolved profile '{}'", rc.active_profile);

    println!("OK   mdc doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("project_root: {}", rc.project_root.display());
    println!("markdown_dir: {}", rc.markdown_dir.display());
    println!("content_dir: {}", rc.content_dir.display());
    println!("meta_file: {}", rc.meta_file.display());
    println!("parsing.separator: {}", rc.parsing.separator());
    println!("parsing.main_text_markers: {}", rc.parsing.main_text_markers.join(", "));

    match discover_sources(&rc.markdown_dir) {
        Ok(files) => println!("topics: {}", files.len()),
        Err(e) => println!("topics: unavailable ({e})"),
    }
}
