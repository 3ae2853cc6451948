use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

const SCENARIO: &str = r#"[
  ["aaaa1111", "bbbb2222", "cccc3333", "dddd4444"],
  ["eeee5555", "ffff6666"],
  ["00001111"]
]"#;

#[test]
fn cli_renders_svg_to_stdout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("tree.json");
    fs::write(&input, SCENARIO).expect("write fixture");

    let exe = assert_cmd::cargo_bin!("merkviz-cli");
    let assert = Command::new(exe)
        .args(["render", input.to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.starts_with("<svg"));
    assert_eq!(stdout.matches("<circle").count(), 7);
    assert_eq!(stdout.matches("<line").count(), 6);
    assert!(stdout.contains("<title>aaaa1111</title>"));
}

#[test]
fn cli_writes_svg_to_out_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("tree.json");
    fs::write(&input, SCENARIO).expect("write fixture");
    let out = tmp.path().join("tree.svg");

    let exe = assert_cmd::cargo_bin!("merkviz-cli");
    Command::new(exe)
        .args([
            "render",
            "--id",
            "smoke test",
            "--out",
            out.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.contains(r#"<svg id="smoke-test""#));
}

#[test]
fn cli_layout_prints_json() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("tree.json");
    fs::write(&input, SCENARIO).expect("write fixture");

    let exe = assert_cmd::cargo_bin!("merkviz-cli");
    let assert = Command::new(exe)
        .args(["layout", "--pretty", input.to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let layout: serde_json::Value = serde_json::from_str(&stdout).expect("layout json");
    assert_eq!(layout["level_count"], 3);
    assert_eq!(layout["nodes"].as_array().unwrap().len(), 7);
    assert_eq!(layout["edges"].as_array().unwrap().len(), 6);
}

#[test]
fn cli_treats_empty_trees_as_nothing_to_render() {
    for input in ["[]", "null", "\"not a tree\""] {
        let exe = assert_cmd::cargo_bin!("merkviz-cli");
        let assert = assert_cmd::Command::new(exe)
            .args(["render", "-"])
            .write_stdin(input)
            .assert()
            .success();
        assert!(assert.get_output().stdout.is_empty());
    }
}

#[test]
fn cli_config_overrides_the_canvas() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("tree.json");
    fs::write(&input, SCENARIO).expect("write fixture");

    let exe = assert_cmd::cargo_bin!("merkviz-cli");
    let assert = Command::new(exe)
        .args([
            "layout",
            "--config",
            r#"{"tree":{"width":1300}}"#,
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let layout: serde_json::Value = serde_json::from_str(&stdout).expect("layout json");
    assert_eq!(layout["width"], 1300.0);
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("merkviz-cli");
    Command::new(exe)
        .args(["render", "--nope"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn cli_rejects_invalid_json_input() {
    let exe = assert_cmd::cargo_bin!("merkviz-cli");
    assert_cmd::Command::new(exe)
        .args(["render", "-"])
        .write_stdin("not json")
        .assert()
        .failure()
        .code(1);
}
