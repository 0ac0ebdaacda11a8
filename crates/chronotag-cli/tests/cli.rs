//! End-to-end tests for the chronotag binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn chronotag() -> Command {
    Command::cargo_bin("chronotag").unwrap()
}

#[test]
fn at_resolves_known_instant() {
    chronotag()
        .args(["at", "2025-10-01", "--time", "15:30", "--tz", "Europe/Istanbul"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<t:1759321800:F>"))
        .stdout(predicate::str::contains("zone: Europe/Istanbul"));
}

#[test]
fn at_accepts_alias_timezone() {
    // GMT+3 resolves to Etc/GMT-3, the same fixed offset as Istanbul.
    chronotag()
        .args(["at", "01.10.2025", "--time", "15:30", "--tz", "GMT+3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("epoch: 1759321800"));
}

#[test]
fn at_defaults_to_utc_midnight() {
    chronotag()
        .args(["at", "2025-10-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<t:1759276800:F>"));
}

#[test]
fn at_honors_style_flag() {
    chronotag()
        .args(["at", "2025-10-01", "--style", "R"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<t:1759276800:R>"));
}

#[test]
fn at_rejects_malformed_date() {
    chronotag()
        .args(["at", "10-01-2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn at_rejects_impossible_date() {
    chronotag()
        .args(["at", "2025-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid calendar date"));
}

#[test]
fn at_rejects_unknown_zone() {
    chronotag()
        .args(["at", "2025-10-01", "--tz", "Not/A_Zone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn at_emits_json() {
    let output = chronotag()
        .args(["at", "2025-10-01", "--time", "15:30", "--tz", "TRT", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["epoch"], 1_759_321_800);
    assert_eq!(value["tag"], "<t:1759321800:F>");
    assert_eq!(value["zone"], "Europe/Istanbul");
}

#[test]
fn in_resolves_future_tag() {
    chronotag()
        .args(["in", "90m"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"<t:\d+:R>").unwrap());
}

#[test]
fn in_rejects_zero_duration() {
    chronotag()
        .args(["in", "0m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duration must be positive"));
}

#[test]
fn in_rejects_garbage() {
    chronotag()
        .args(["in", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration format"));
}

#[test]
fn now_resolves_current_instant() {
    chronotag()
        .args(["now", "--tz", "GMT+3"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"<t:\d+:F>").unwrap());
}

#[test]
fn now_accepts_negative_offset() {
    chronotag()
        .args(["now", "--offset", "-30m"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"epoch: \d+").unwrap());
}

#[test]
fn formats_lists_all_codes() {
    let assert = chronotag().arg("formats").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for code in ["t", "T", "d", "D", "f", "F", "R"] {
        assert!(
            stdout.lines().any(|line| line.starts_with(code)),
            "missing code {code} in:\n{stdout}"
        );
    }
    assert!(stdout.contains("Relative Time"));
}
