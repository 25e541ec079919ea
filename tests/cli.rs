use std::process::{Command, Output};

use anyhow::Result;

fn twvarint(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_twvarint"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn encode_prints_hex_per_value() -> Result<()> {
    let output = twvarint(&["encode", "--", "33", "-1", "127"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["33\t21", "-1\t40", "127\tbf01"]);
    Ok(())
}

#[test]
fn encode_rejects_values_outside_i32() -> Result<()> {
    let output = twvarint(&["encode", "2147483648"])?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let output = twvarint(&["encode", "--width", "64", "2147483648"])?;
    assert!(output.status.success());
    Ok(())
}

#[test]
fn strict_decode_stops_at_overflow() -> Result<()> {
    let output = twvarint(&["decode", "bf01818181818181"])?;
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().collect::<Vec<_>>(), ["127\t(2 bytes)"]);
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("offset 2"), "stderr was {stderr:?}");
    assert!(stderr.contains("overflows 32-bit"), "stderr was {stderr:?}");
    Ok(())
}

#[test]
fn strict_decode_fails_on_truncated_tail() -> Result<()> {
    let output = twvarint(&["decode", "--width", "64", "4081"])?;
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().collect::<Vec<_>>(), ["-1\t(1 bytes)"]);
    Ok(())
}

#[test]
fn lenient_decode_reports_trailing_bytes() -> Result<()> {
    let output = twvarint(&["decode", "--lenient", "bf01408181"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        ["127\t(2 bytes)", "-1\t(1 bytes)"]
    );
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("2 trailing bytes"), "stderr was {stderr:?}");
    Ok(())
}

#[test]
fn lenient_decode_caps_unterminated_values() -> Result<()> {
    let output = twvarint(&["decode", "--lenient", "8181818181"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.trim_end().ends_with("(5 bytes)"), "stdout was {stdout:?}");
    Ok(())
}

#[test]
fn decode_rejects_malformed_hex() -> Result<()> {
    let output = twvarint(&["decode", "zz"])?;
    assert!(!output.status.success());
    Ok(())
}
