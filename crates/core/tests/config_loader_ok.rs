use mdcards_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r###"
version = 1
profile = "default"

[profiles.default]
project_root = "/tmp/site"

[parsing]
main_text_markers = ["## Post"]

[logging]
level = "debug"
file = "{{project_root}}/mdc.log"
"###;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.project_root.display().to_string(), "/tmp/site");
    assert!(rc.markdown_dir.ends_with("src/markdown"));
    assert!(rc.content_dir.ends_with("src/content"));
    assert!(rc.meta_file.ends_with("src/content/topicsMeta.js"));
    assert_eq!(rc.parsing.main_text_markers, vec!["## Post".to_string()]);
    assert_eq!(rc.parsing.separator(), "---");
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/site/mdc.log")));
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("mdcards/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
project_root = "/tmp/def"

[profiles.drafts]
project_root = "/tmp/drafts"
markdown_dir = "{{project_root}}/notes"
content_dir  = "{{project_root}}/out"
meta_file    = "{{project_root}}/config/topicsMeta.js"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("drafts")).expect("should load");
    assert_eq!(rc.active_profile, "drafts");
    assert_eq!(rc.markdown_dir, PathBuf::from("/tmp/drafts/notes"));
    assert_eq!(rc.content_dir, PathBuf::from("/tmp/drafts/out"));
    assert_eq!(rc.meta_file, PathBuf::from("/tmp/drafts/config/topicsMeta.js"));
}
