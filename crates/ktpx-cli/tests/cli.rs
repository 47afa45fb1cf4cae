//! End-to-end tests for the ktpx binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_card(dir: &tempfile::TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

const CARD_TEXT: &str = "NIK\n\
    3302021201990001\n\
    JOHN DOE\n\
    Tempat/Tgl Lahir\n\
    JAKARTA, 12-05-1995\n\
    Alamat\n\
    JL. MAWAR NO 5\n";

#[test]
fn process_emits_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_card(&dir, "card.txt", CARD_TEXT);

    Command::cargo_bin("ktpx")
        .unwrap()
        .args(["process", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3302021201990001"))
        .stdout(predicate::str::contains("JOHN DOE"))
        .stdout(predicate::str::contains("1995-05-12"));
}

#[test]
fn process_emits_csv_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_card(&dir, "card.txt", CARD_TEXT);

    Command::cargo_bin("ktpx")
        .unwrap()
        .args(["process", input.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nik,name,birthplace,birth_date,address"));
}

#[test]
fn process_check_reports_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_card(&dir, "partial.txt", "Alamat : JL. KENANGA NO 2\n");

    Command::cargo_bin("ktpx")
        .unwrap()
        .args(["process", input.to_str().unwrap(), "--check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Missing fields:"))
        .stderr(predicate::str::contains("nik"));
}

#[test]
fn process_fails_on_missing_input() {
    Command::cargo_bin("ktpx")
        .unwrap()
        .args(["process", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_card(&dir, "a.txt", CARD_TEXT);
    write_card(&dir, "b.txt", "Alamat :\nMESS KESDAM IV\n");
    let out = dir.path().join("out");

    let pattern = format!("{}/*.txt", dir.path().display());

    Command::cargo_bin("ktpx")
        .unwrap()
        .args([
            "batch",
            &pattern,
            "--output-dir",
            out.to_str().unwrap(),
            "--summary",
        ])
        .assert()
        .success();

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());

    let summary = std::fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("a.txt"));
    assert!(summary.contains("3302021201990001"));
    assert!(summary.contains("MESS KESDAM IV"));
}

#[test]
fn config_show_prints_defaults() {
    Command::cargo_bin("ktpx")
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name_window_span"));
}
