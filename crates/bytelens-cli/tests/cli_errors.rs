use assert_cmd::Command;
use predicates::prelude::*;

fn bytelens() -> Command {
    Command::cargo_bin("bytelens").unwrap()
}

#[test]
fn test_rejects_width_that_is_not_a_multiple_of_eight() {
    bytelens()
        .args(["--hex", "--width", "7"])
        .write_stdin(&b"irrelevant"[..])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("multiple of 8"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_rejects_zero_width() {
    bytelens()
        .args(["--hex", "--width", "0"])
        .write_stdin(&b""[..])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("multiple of 8"));
}

#[test]
fn test_missing_input_file() {
    bytelens()
        .args(["--hex", "--file", "/no/such/path/bytelens-input"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    bytelens()
        .arg("--base64")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--base64"));
}

#[test]
fn test_help_lists_every_codec_flag() {
    let assert = bytelens().arg("--help").assert().success();
    let help = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for flag in [
        "--int8", "--uint8", "--int16", "--uint16", "--int32", "--uint32", "--float32",
        "--int64", "--uint64", "--float64", "--hex", "--ascii", "--utf8", "--file", "--width",
        "--lines",
    ] {
        assert!(help.contains(flag), "help is missing {}", flag);
    }
}
