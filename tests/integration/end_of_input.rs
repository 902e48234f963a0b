// tests/integration/end_of_input.rs
use predicates::prelude::*;
use unique_collector_shared_kernel::{ApplicationError, CollectorError};

#[path = "../common/mod.rs"]
mod common;
use common::{bin, run_session};

#[test]
fn closed_stdin_before_capacity_fails() {
    bin()
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input ended while waiting for maximum array size"));
}

#[test]
fn closed_stdin_mid_collection_fails_without_final_array() {
    bin()
        .write_stdin("3\n5\n6\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Final array").not())
        .stderr(predicate::str::contains("Number 3"));
}

#[test]
fn exhausted_input_keeps_typed_error() {
    let (result, _) = run_session("2\n5\n");
    let err = result.unwrap_err();
    let collector = err.downcast_ref::<CollectorError>().expect("collector error");

    let CollectorError::Context { source, .. } = collector else {
        panic!("expected context, got {collector:?}");
    };
    assert!(matches!(
        source.as_ref(),
        CollectorError::Application(ApplicationError::InputExhausted { .. })
    ));
}
