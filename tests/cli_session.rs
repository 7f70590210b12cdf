// Drives the compiled binary over piped stdin. The program is line based,
// so no pseudo terminal is needed. HOME points at a temp dir so history and
// logs stay out of the real state directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::tempdir;

const SCRIPT: &str = "1\nAda\nada@example.com\nsecret1\n\
2\nada@example.com\nsecret1\n\
1\n1\n\nasdf jkl;\n\n\
The quick brown fox jumps over the lazy dog\n\
2\n";

fn drill(home: &Path) -> Command {
    let config = home.join("config.json");
    fs::write(&config, r#"{ "password_cost": 4 }"#).unwrap();

    let mut cmd = Command::cargo_bin("wpm-drill").unwrap();
    cmd.env("HOME", home).arg("--config").arg(&config);
    cmd
}

#[test]
fn full_session_over_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    let assert = drill(home.path()).write_stdin(SCRIPT).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(stdout.contains("signup successful"));
    assert!(stdout.contains("Warm-up complete!"));
    assert!(stdout.contains("You typed the text correctly in"));
    assert!(stdout.contains("Exiting the typing test. Have a great day!"));

    let history = home
        .path()
        .join(".local")
        .join("state")
        .join("wpm-drill")
        .join("history.csv");
    let rows = fs::read_to_string(history)?;
    assert_eq!(rows.lines().count(), 2);
    assert!(rows.contains("ada@example.com"));
    Ok(())
}

#[test]
fn no_history_flag_skips_the_file() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    drill(home.path())
        .arg("--no-history")
        .write_stdin(SCRIPT)
        .assert()
        .success();

    let history = home
        .path()
        .join(".local")
        .join("state")
        .join("wpm-drill")
        .join("history.csv");
    assert!(!history.exists());
    Ok(())
}

#[test]
fn presets_skip_the_menus() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let script = "1\nAda\nada@example.com\nsecret1\n\
2\nada@example.com\nsecret1\n\
\nasdf jkl;\n\n\
Asynchronous programming is a form of parallel programming\n\
2\n";

    let assert = drill(home.path())
        .args(["--duration", "90 seconds", "--difficulty", "Technical text"])
        .write_stdin(script)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(!stdout.contains("Select Your Test Duration"));
    assert!(stdout.contains("You typed the text correctly in"));
    Ok(())
}

#[test]
fn empty_input_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    let assert = drill(home.path()).write_stdin("").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(stdout.contains("Do you want to sign up or login?"));
    Ok(())
}
