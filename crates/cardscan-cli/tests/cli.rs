use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cardscan() -> Command {
    Command::cargo_bin("cardscan").unwrap()
}

fn write_visa_dump(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("visa.txt");
    fs::write(&path, "VISA\n4111 1111 1111 1111\nJOHN DOE\nVALID THRU\n09/28\n").unwrap();
    path
}

#[test]
fn parse_text_dump_as_json() {
    let dir = TempDir::new().unwrap();
    let input = write_visa_dump(&dir);

    cardscan()
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cardNumber\": \"4111 1111 1111 1111\""))
        .stdout(predicate::str::contains("\"name\": \"JOHN DOE\""))
        .stdout(predicate::str::contains("\"expiryDate\": \"09/28\""));
}

#[test]
fn parse_json_dump_as_text() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("amex.json");
    fs::write(
        &input,
        r#"[
            {"text": "AMERICAN EXPRESS", "region": {"x": 20, "y": 10, "width": 200, "height": 30}},
            {"text": "3782 822463 10005 15", "region": {"x": 20, "y": 120, "width": 300, "height": 30}},
            {"text": "15", "region": {"x": 250, "y": 160, "width": 20, "height": 12}},
            {"text": "CHARLES FROST", "region": {"x": 20, "y": 200, "width": 150, "height": 20}},
            {"text": "THRU 05/29", "region": {"x": 180, "y": 160, "width": 60, "height": 12}}
        ]"#,
    )
    .unwrap();

    cardscan()
        .args(["parse", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Card number: 3782 8224 6310 005"))
        .stdout(predicate::str::contains("Name:        CHARLES FROST"))
        .stdout(predicate::str::contains("Expiry date: 05/29"));
}

#[test]
fn parse_with_config_disables_grouping() {
    let dir = TempDir::new().unwrap();
    let input = write_visa_dump(&dir);
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"output": {"group_card_number": false}}"#).unwrap();

    cardscan()
        .arg("--config")
        .arg(&config)
        .args(["parse", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("4111111111111111,JOHN DOE,09/28"));
}

#[test]
fn parse_raw_keeps_every_fragment() {
    let dir = TempDir::new().unwrap();
    let input = write_visa_dump(&dir);

    cardscan()
        .args(["parse", "--raw", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("VISA"))
        .stdout(predicate::str::contains("VALID THRU"));
}

#[test]
fn parse_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_visa_dump(&dir);
    let output = dir.path().join("fields.json");

    cardscan()
        .arg("parse")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("JOHN DOE"));
}

#[test]
fn parse_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    cardscan()
        .arg("parse")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn parse_malformed_dump_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "[{\"text\": ").unwrap();

    cardscan()
        .arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unreadable fragments"));
}

#[test]
fn batch_writes_summary() {
    let dir = TempDir::new().unwrap();
    write_visa_dump(&dir);
    fs::write(dir.path().join("blank.txt"), "VISA\nPLATINUM\n").unwrap();
    let out_dir = dir.path().join("out");

    let pattern = dir.path().join("*.txt");
    cardscan()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success();

    assert!(out_dir.join("visa.json").exists());
    assert!(out_dir.join("blank.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("visa.txt,success,4111111111111111,JOHN DOE,09/28"));
    assert!(summary.contains("blank.txt,success,,,"));
}
