use assert_cmd::Command;

fn bytelens() -> Command {
    Command::cargo_bin("bytelens").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Trailing padding is insignificant; strip it so assertions read well.
fn normalized(stdout: &str) -> String {
    stdout
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_hex_ascii_row() {
    let stdout = stdout_of(
        bytelens()
            .args(["--hex", "--ascii"])
            .write_stdin(&b"Hello\n\x00\x01"[..]),
    );
    insta::assert_snapshot!(normalized(&stdout), @r"
hex                     ascii
--------------------------------
48,65,6c,6c,6f,0a,00,01 Hello⏎␀.
");
}

#[test]
fn test_default_codecs_when_no_flag_is_set() {
    let stdout = stdout_of(bytelens().write_stdin(&b"Hi"[..]));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    // int8 (39) + hex (23) + ascii (8) with single-space joins
    assert_eq!(lines[0].chars().count(), 39 + 1 + 23 + 1 + 8);
    assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), [
        "int8", "hex", "ascii"
    ]);
    assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), [
        "72,105", "48,69", "Hi"
    ]);
}

#[test]
fn test_line_limit_is_exact() {
    let stdout = stdout_of(
        bytelens()
            .args(["--hex", "-n", "2"])
            .write_stdin(vec![0x41u8; 40]),
    );
    assert_eq!(stdout.lines().count(), 2 + 2);
}

#[test]
fn test_empty_input_prints_header_only() {
    let stdout = stdout_of(bytelens().args(["--hex"]).write_stdin(&b""[..]));
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_wider_rows() {
    let stdout = stdout_of(
        bytelens()
            .args(["--ascii", "--width", "16"])
            .write_stdin(&b"0123456789abcdef"[..]),
    );
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[2], "0123456789abcdef");
}

#[test]
fn test_utf8_sequence_split_across_rows() {
    // 16 bytes; the first row ends inside the second '€'
    let stdout = stdout_of(
        bytelens()
            .args(["--utf8"])
            .write_stdin("ab€cd€ef€g".as_bytes().to_vec()),
    );
    insta::assert_snapshot!(normalized(&stdout), @r"
utf8
--------
ab€cd
€ef€g
");
}
