// src/app.rs
use anyhow::Result;
use tracing::debug;
use unique_collector_infra::{stdin_tokens, stdout_transcript};
use unique_collector_ports::{input::TokenSource, transcript::Transcript};
use unique_collector_usecase::{CollectSession, SessionOutcome};

use crate::config::Config;

/// Runs one session on the process stdin/stdout.
pub fn run(config: &Config) -> Result<SessionOutcome> {
    let mut source = stdin_tokens();
    let mut transcript = stdout_transcript();
    run_with(config, &mut source, &mut transcript)
}

pub fn run_with(
    config: &Config,
    source: &mut dyn TokenSource,
    transcript: &mut dyn Transcript,
) -> Result<SessionOutcome> {
    debug!(min = config.bounds.min(), max = config.bounds.max(), "starting session");
    let outcome = CollectSession::new(source, transcript, config.bounds).run()?;
    Ok(outcome)
}
