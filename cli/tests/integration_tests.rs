use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn strlist_cli() -> Command {
    cargo_bin_cmd!("strlist-cli")
}

#[test]
fn cli_help() {
    strlist_cli()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("strlist host CLI"))
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("Splice"));
}

#[test]
fn cli_no_arguments_prints_help_and_fails() {
    strlist_cli()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn cli_unknown_option() {
    strlist_cli()
        .arg("--frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown option"));
}

#[test]
fn cli_eval_single_command() {
    strlist_cli()
        .args(["-e", "Count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0"));
}

#[test]
fn cli_eval_unknown_method_exits_2() {
    strlist_cli()
        .args(["-e", "Shuffle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown method 'Shuffle'"));
}

#[test]
fn cli_run_script() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# build the list").unwrap();
    writeln!(file, "Append A, B, C, D, E").unwrap();
    writeln!(file, "Count").unwrap();
    writeln!(file, "Splice 2").unwrap();
    writeln!(file, "Remove C").unwrap();
    writeln!(file, "Count").unwrap();

    strlist_cli()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("5"))
        .stdout(predicate::str::contains(r#"["C", "D", "E"]"#))
        .stdout(predicate::str::contains("4"));
}

#[test]
fn cli_script_error_reports_line_number() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Append A").unwrap();
    writeln!(file, "Item nope").unwrap();

    strlist_cli()
        .arg(file.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error at line 2"))
        .stderr(predicate::str::contains("non-negative integer"));
}

#[test]
fn cli_missing_script_exits_1() {
    strlist_cli()
        .arg("/definitely/not/a/script.cmds")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn cli_json_mode_emits_records() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Append A, B").unwrap();
    writeln!(file, "Item 1").unwrap();
    writeln!(file, "Splice 0, 1").unwrap();

    strlist_cli()
        .arg("--json")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"method":"Append","status":"ok","kind":"int","value":1}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"method":"Item","status":"ok","kind":"string","value":"B"}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"method":"Splice","status":"ok","kind":"list","value":["A"]}"#,
        ));
}

#[test]
fn cli_json_mode_error_record() {
    strlist_cli()
        .args(["--json", "-e", "Erase -1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""status":"error""#))
        .stdout(predicate::str::contains("non-negative integer"));
}
