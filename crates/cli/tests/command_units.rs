use std::fs;
use std::path::Path;

use spec_check_core::{check, ScanSummary};
use spec_checker::commands::{run_check, write_json_report, write_text_report};
use tempfile::tempdir;

fn summary_of(files: &[(&str, &str)]) -> ScanSummary {
    let mut summary = ScanSummary::default();
    for (name, body) in files {
        summary.push(check(body, name));
    }
    summary
}

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, body).expect("write fixture");
}

#[test]
fn text_report_has_one_paragraph_per_failing_file() {
    let summary = summary_of(&[
        ("lib/a.ex", "def a(x), do: x\n"),
        ("lib/ok.ex", "@spec ok() :: :ok\ndef ok(), do: :ok\n"),
        ("lib/b.ex", "@spec b() :: :ok\n"),
    ]);

    let mut out = Vec::new();
    write_text_report(&mut out, &summary).expect("write report");
    let text = String::from_utf8(out).expect("utf-8");

    assert_eq!(
        text,
        "The specs are missing for functions in file lib/a.ex: a.\n\n\
         The functions are missing for specs in file lib/b.ex: b.\n\n"
    );
}

#[test]
fn text_report_is_empty_when_everything_passes() {
    let summary = summary_of(&[("lib/ok.ex", "@spec ok() :: :ok\ndef ok(), do: :ok\n")]);
    let mut out = Vec::new();
    write_text_report(&mut out, &summary).expect("write report");
    assert!(out.is_empty());
}

#[test]
fn json_report_round_trips_counts() {
    let summary = summary_of(&[("lib/a.ex", "def a(x), do: x\n")]);
    let mut out = Vec::new();
    write_json_report(&mut out, &summary).expect("write report");

    let value: serde_json::Value = serde_json::from_slice(&out).expect("parse json");
    assert_eq!(value["files_checked"], 1);
    assert_eq!(value["files_failed"], 1);
    assert_eq!(value["reports"][0]["function_without_spec"][0], "a");
}

#[test]
fn run_check_applies_source_dir_override() {
    let dir = tempdir().expect("tempdir");
    write(dir.path(), "lib/a.ex", "def a(x), do: x\n");
    write(dir.path(), "src/b.ex", "@spec b() :: :ok\ndef b(), do: :ok\n");

    let default = run_check(dir.path(), None).expect("default scan");
    assert!(!default.passed());

    let overridden = run_check(dir.path(), Some("src".to_string())).expect("override scan");
    assert_eq!(overridden.files_checked, 1);
    assert!(overridden.passed());
}

#[test]
fn run_check_surfaces_config_errors() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join(".spec-checker.json"), r#"{ "source_dir": 3 }"#)
        .expect("write config");
    let err = run_check(dir.path(), None).expect_err("bad config");
    assert!(format!("{err:#}").contains("Invalid config file"));
}
