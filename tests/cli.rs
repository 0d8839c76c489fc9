use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn script(name: &str, content: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join(format!("loxscan-{}-{}.lox", std::process::id(), name));
    fs::write(&path, content)?;
    Ok(path)
}

fn loxscan() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("loxscan")?;
    cmd.env("NO_COLOR", "1").current_dir(std::env::temp_dir());
    Ok(cmd)
}

#[test]
fn prints_tokens_of_script() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("tokens", "var x = \"hi\"; // note\n")?;

    loxscan()?
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "Var var nil\n\
             Identifier x nil\n\
             Equal = nil\n\
             String \"hi\" hi\n\
             Semicolon ; nil\n\
             Eof  nil\n",
        );

    Ok(())
}

#[test]
fn prints_json_tokens() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("json", "1 + 2\n3")?;

    let output = loxscan()?.arg("--json").arg(&path).output()?;
    assert!(output.status.success());

    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let tokens = tokens.as_array().ok_or("expected a JSON array")?;
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0]["literal"]["Number"], 1.0);
    assert_eq!(tokens[3]["line"], 2);
    assert_eq!(tokens[4]["ty"], "Eof");

    Ok(())
}

#[test]
fn lexical_errors_exit_with_data_error() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("errors", "print 1;\n\"abc")?;

    loxscan()?
        .arg(&path)
        .assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "[line 2] Error: Unterminated string.",
        ))
        .stderr(predicate::str::contains("at line 2, column 5:"));

    Ok(())
}

#[test]
fn reports_every_unexpected_character() -> Result<(), Box<dyn std::error::Error>> {
    let path = script("unexpected", "@\n#")?;

    loxscan()?
        .arg(&path)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("[line 1] Error: Unexpected character."))
        .stderr(predicate::str::contains("[line 2] Error: Unexpected character."));

    Ok(())
}

#[test]
fn missing_script_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    loxscan()?
        .arg("definitely/not/a/script.lox")
        .assert()
        .code(66)
        .stderr(predicate::str::starts_with(
            "Error reading definitely/not/a/script.lox",
        ));

    Ok(())
}

#[test]
fn too_many_arguments_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    loxscan()?
        .args(&["one.lox", "two.lox"])
        .assert()
        .code(64)
        .stdout(predicate::str::contains("Usage: loxscan [script]"));

    Ok(())
}

#[test]
fn prompt_scans_each_line() -> Result<(), Box<dyn std::error::Error>> {
    loxscan()?
        .write_stdin("1 + 2\n\"open\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number 1 1.0"))
        .stdout(predicate::str::contains("Identifier x nil"))
        .stderr(predicate::str::contains("[line 1] Error: Unterminated string."))
        .stderr(predicate::str::contains("at line 1, column 6:\n\"open\n"));

    Ok(())
}

#[test]
fn prompt_stops_on_exit() -> Result<(), Box<dyn std::error::Error>> {
    loxscan()?
        .write_stdin("exit\nprint 1;\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print").not());

    Ok(())
}
