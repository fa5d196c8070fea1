use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn new_then_convert() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!("version = 1\n[profiles.default]\nproject_root = \"{}\"\n", tmp.path().display()),
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdc"));
    cmd.arg("--config").arg(&cfg);
    cmd.args(["new", "topic05", "Moving", "averages", "--cards", "2"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   mdc new"))
        .stdout(predicate::str::contains("topic05.md"));

    let text = fs::read_to_string(tmp.path().join("src/markdown/topic05.md")).unwrap();
    assert!(text.contains("topicId: topic05"));
    assert!(text.contains("# Moving averages"));
    assert!(text.contains("## Card 2 title"));

    let index = fs::read_to_string(tmp.path().join("src/content/topicsMeta.js")).unwrap();
    assert!(index.contains(r#""title": "Moving averages""#));

    let mut convert = Command::new(assert_cmd::cargo::cargo_bin!("mdc"));
    convert.arg("--config").arg(&cfg).args(["convert", "topic05"]);
    convert
        .assert()
        .success()
        .stdout(predicate::str::contains("warning:").not());
}

#[test]
fn new_refuses_existing_file() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!("version = 1\n[profiles.default]\nproject_root = \"{}\"\n", tmp.path().display()),
    )
    .unwrap();
    let md = tmp.path().join("src/markdown");
    fs::create_dir_all(&md).unwrap();
    fs::write(md.join("topic01.md"), "keep me").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdc"));
    cmd.arg("--config").arg(&cfg).args(["new", "topic01", "Title"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL mdc new"))
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(md.join("topic01.md")).unwrap(), "keep me");
}
