//! Integration tests for the text and file helpers

use pretty_assertions::assert_eq;

use posix_utils::{format, fs, text, FileError, Value};

#[test]
fn test_template_file_round_trip() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let template_path = dir.path().join("greeting.tmpl");
    let output_path = dir.path().join("greeting.txt");

    fs::write_file(&template_path, "Hello {1}, you have {2} new messages\n").unwrap();

    let template = fs::read_file(&template_path).unwrap();
    let out = format(&template, &[Value::from("ada"), Value::from(3)]).unwrap();
    fs::write_file(&output_path, &out).unwrap();

    assert_eq!(
        fs::read_file(&output_path).unwrap(),
        "Hello ada, you have 3 new messages\n"
    );
}

#[test]
fn test_split_lines_and_write_them_back() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("hosts.txt");

    let pieces = text::split("alpha;beta;;gamma;", ";");
    assert_eq!(pieces, vec!["alpha", "beta", "", "gamma"]);

    fs::write_file_lines(&path, &pieces).unwrap();
    assert_eq!(fs::read_file_lines(&path).unwrap(), pieces);
}

#[test]
fn test_extract_placeholders_with_regex() {
    let found = text::find_all(r"\{[0-9]+\}", "test: <1> = {1}, <2> = {2}, <3> = {3}").unwrap();
    assert_eq!(found, vec!["{1}", "{2}", "{3}"]);
}

#[test]
fn test_replace_all_left_to_right() {
    assert_eq!(text::replace_all("{1}-{1}", "{1}", "X"), "X-X");
    assert_eq!(text::replace_all("", "{1}", "X"), "");
}

#[test]
fn test_read_missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("missing.txt");

    match fs::read_file_lines(&path) {
        Err(FileError::Read { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected read error, got {:?}", other),
    }
}
