use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_unique_collector"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("unique_collector"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_unique_collector"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(unique_collector::VERSION));
}

#[test]
fn rejects_unknown_flags() {
    Command::new(env!("CARGO_BIN_EXE_unique_collector"))
        .arg("--size")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn logs_stay_off_stdout() {
    Command::new(env!("CARGO_BIN_EXE_unique_collector"))
        .env("RUST_LOG", "debug")
        .write_stdin("1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity accepted").not())
        .stderr(predicate::str::contains("capacity accepted"));
}
