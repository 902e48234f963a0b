// tests/integration/scenarios.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{bin, run_session};

#[test]
fn duplicate_entry_is_skipped() {
    bin()
        .write_stdin("3\n5 5 10 20\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate detected! Try again.\nNumber 2: "))
        .stdout(predicate::str::contains("Final array: 5 10 20\n"));
}

#[test]
fn negative_capacity_is_re_prompted() {
    bin()
        .write_stdin("-1\n2\n1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Enter maximum array size: Invalid input! Enter a positive number: ",
        ))
        .stdout(predicate::str::contains("Enter up to 2 unique numbers between 1 and 100:"));
}

#[test]
fn non_numeric_and_out_of_range_entries() {
    bin()
        .write_stdin("2\nabc\n50\n200\n60\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input! Enter a numeric value.\n"))
        .stdout(predicate::str::contains("Out of range! Must be between 1 and 100.\n"))
        .stdout(predicate::str::ends_with("\nFinal array: 50 60\n"));
}

#[test]
fn zero_capacity_then_single_entry() {
    bin()
        .write_stdin("0\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input! Enter a positive number: "))
        .stdout(predicate::str::contains("Final array: 1\n"));
}

#[test]
fn full_transcript_matches_prompts() {
    let (result, out) = run_session("2\n7\nx 9\n7 8\n");
    let outcome = result.unwrap();

    assert_eq!(outcome.values.len(), outcome.capacity.get());
    assert_eq!(
        out,
        "Enter maximum array size: \
         Enter up to 2 unique numbers between 1 and 100:\n\
         Number 1: \
         Number 2: Invalid input! Enter a numeric value.\n\
         Number 2: Duplicate detected! Try again.\n\
         Number 2: \n\
         Final array: 7 8\n"
    );
}

#[test]
fn entries_may_share_a_line_with_the_capacity() {
    let (result, out) = run_session("3 100 1 50\n");
    assert_eq!(result.unwrap().capacity.get(), 3);
    assert!(out.ends_with("Final array: 100 1 50\n"));
}

#[test]
fn values_wider_than_int_take_the_retry_path() {
    let (result, out) = run_session("5000000000000\n2\n5000000000 7\n8\n9\n");
    let outcome = result.unwrap();

    assert_eq!(outcome.capacity.get(), 2);
    assert!(out.contains("Invalid input! Enter a positive number: "));
    assert!(out.contains("Number 1: Invalid input! Enter a numeric value.\n"));
    assert!(out.ends_with("Final array: 8 9\n"));
}
