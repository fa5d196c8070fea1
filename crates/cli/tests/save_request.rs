use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn config(root: &Path) -> PathBuf {
    let cfg = root.join("config.toml");
    fs::write(
        &cfg,
        format!("version = 1\n[profiles.default]\nproject_root = \"{}\"\n", root.display()),
    )
    .unwrap();
    cfg
}

const REQUEST: &str = r#"{
    "topicId": "topic01",
    "contentData": {
        "coverCard": { "title": "Cover", "subtitle": "Sub", "showHeader": true, "showFooter": false },
        "contentCards": [{ "title": "One", "body": "b", "showHeader": true, "showFooter": true }],
        "mainText": "m",
        "description": "UI only"
    }
}"#;

#[test]
fn save_from_stdin() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());

    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("mdc"));
    cmd.arg("--config").arg(&cfg).arg("save").write_stdin(REQUEST);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""success": true"#));

    let module = fs::read_to_string(tmp.path().join("src/content/topic01_content.js")).unwrap();
    assert!(module.contains("export const topic01_contentData"));
    assert!(!module.contains("UI only"));
}

#[test]
fn save_rejects_bad_topic_id() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());
    let input = tmp.path().join("request.json");
    fs::write(&input, REQUEST.replace("topic01", "../../etc/x")).unwrap();

    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("mdc"));
    cmd.arg("--config").arg(&cfg).args(["save", "--input"]).arg(&input);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains(r#""success": false"#))
        .stdout(predicate::str::contains("invalid topic id"));
}

#[test]
fn save_rejects_malformed_json() {
    let tmp = tempdir().unwrap();
    let cfg = config(tmp.path());

    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("mdc"));
    cmd.arg("--config").arg(&cfg).arg("save").write_stdin("{ not json");
    cmd.assert().failure();
}
