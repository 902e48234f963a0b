// tests/common/mod.rs
//! 共通テストユーティリティ
#![allow(dead_code)]

use std::io::Cursor;

use unique_collector::{app, config::Config};
use unique_collector_infra::{LineTokenReader, WriterTranscript};

/// Runs a session in memory over `input`, returning the result and everything written to stdout.
pub fn run_session(input: &str) -> (anyhow::Result<unique_collector_usecase::SessionOutcome>, String) {
    let mut source = LineTokenReader::new(Cursor::new(input.as_bytes().to_vec()));
    let mut transcript = WriterTranscript::new(Vec::new());
    let result = app::run_with(&Config::default(), &mut source, &mut transcript);
    let out = String::from_utf8(transcript.into_inner()).expect("transcript is UTF-8");
    (result, out)
}

pub fn bin() -> assert_cmd::Command {
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_unique_collector"))
}
