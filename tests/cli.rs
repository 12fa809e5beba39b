// ABOUTME: Integration tests for the onthisday CLI binary.
// ABOUTME: Tests argument validation, line output, JSON output, and transport failures.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn onthisday_cmd() -> Command {
    Command::cargo_bin("onthisday").unwrap()
}

const DAY_PAGE: &str = r#"<html><body>
    <h2><span id="Events"></span></h2>
    <ul>
        <li>1969 – Apollo 11 moon landing</li>
        <li>not-an-entry</li>
        <li>1976 – Viking 1 lands on Mars</li>
    </ul>
</body></html>"#;

#[test]
fn no_args_prints_usage_and_exits_one() {
    onthisday_cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn one_arg_prints_usage_and_exits_one() {
    onthisday_cmd()
        .arg("7")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn non_integer_arg_exits_one() {
    onthisday_cmd()
        .arg("July")
        .arg("20")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn prints_one_line_per_event() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/July_20");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(DAY_PAGE);
    });

    let output = onthisday_cmd()
        .arg("7")
        .arg("20")
        .arg("--base-url")
        .arg(server.url(""))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    mock.assert();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "expected 2 event lines, got: {:?}", lines);
    assert!(lines[0].contains("Apollo 11 moon landing"));
    assert!(lines[1].contains("Viking 1 lands on Mars"));
}

#[test]
fn json_flag_outputs_a_json_array() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/July_20");
        then.status(200).body(DAY_PAGE);
    });

    let output = onthisday_cmd()
        .arg("7")
        .arg("20")
        .arg("--json")
        .arg("--base-url")
        .arg(server.url(""))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let events: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let events = events.as_array().expect("expected a JSON array");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["date"], "1969-07-20");
    assert_eq!(events[0]["description"], "Apollo 11 moon landing");
}

#[test]
fn empty_events_section_exits_zero_with_no_output() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/July_20");
        then.status(200)
            .body("<html><body><p>no events section</p></body></html>");
    });

    onthisday_cmd()
        .arg("7")
        .arg("20")
        .arg("--base-url")
        .arg(server.url(""))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn transport_error_exits_one_with_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/July_20");
        then.status(503);
    });

    onthisday_cmd()
        .arg("7")
        .arg("20")
        .arg("--base-url")
        .arg(server.url(""))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("fetch error"));
}

#[test]
fn out_of_range_month_exits_one() {
    onthisday_cmd()
        .arg("13")
        .arg("1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid date"));
}
