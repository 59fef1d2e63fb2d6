use std::fs;

use spec_checker::{is_help_arg, resolve_root};
use tempfile::tempdir;

#[test]
fn resolve_root_returns_cwd_for_dot() {
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(resolve_root(".").expect("resolve"), cwd);
}

#[test]
fn resolve_root_canonicalizes_existing_directory() {
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");

    let result = resolve_root(subdir.to_str().expect("utf-8 path")).expect("resolve");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));
}

#[test]
fn resolve_root_rejects_missing_path() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("does-not-exist");

    let err = resolve_root(missing.to_str().expect("utf-8 path")).expect_err("missing root");
    assert!(err.to_string().contains("Project root does not exist"));
}

#[test]
fn resolve_root_rejects_plain_file() {
    let tmp = tempdir().expect("tempdir");
    let file = tmp.path().join("mix.exs");
    fs::write(&file, "").expect("write file");

    let err = resolve_root(file.to_str().expect("utf-8 path")).expect_err("file root");
    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn help_args_are_recognized() {
    assert!(is_help_arg("help"));
    assert!(is_help_arg("-h"));
    assert!(is_help_arg("--help"));
    assert!(!is_help_arg("."));
    assert!(!is_help_arg("helper"));
}
