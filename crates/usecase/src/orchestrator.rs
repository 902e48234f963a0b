// crates/usecase/src/orchestrator.rs
use tracing::{debug, info, info_span, trace, warn};
use unique_collector_domain::{
    AcceptedSequence, Bounds,
    parsing::{parse_capacity, parse_entry},
};
use unique_collector_ports::{input::TokenSource, transcript::Transcript};
use unique_collector_shared_kernel::{ApplicationError, Capacity, ErrorContext, Result};

use crate::dto::SessionOutcome;

const CAPACITY_PROMPT: &str = "Enter maximum array size: ";

/// One interactive run: acquire a capacity, collect that many unique entries, print them.
pub struct CollectSession<'a> {
    source: &'a mut dyn TokenSource,
    transcript: &'a mut dyn Transcript,
    bounds: Bounds,
}

impl<'a> CollectSession<'a> {
    pub fn new(
        source: &'a mut dyn TokenSource,
        transcript: &'a mut dyn Transcript,
        bounds: Bounds,
    ) -> Self {
        Self { source, transcript, bounds }
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        let capacity = self.acquire_capacity().context("reading capacity")?;
        let (sequence, rejected) = self.collect(capacity).context("collecting entries")?;
        self.report(&sequence)?;

        info!(capacity = capacity.get(), rejected, "session complete");
        Ok(SessionOutcome { capacity, values: sequence.into_values(), rejected })
    }

    /// Prompts once, then re-prompts with the rejection message until a positive integer arrives.
    pub fn acquire_capacity(&mut self) -> Result<Capacity> {
        let _span = info_span!("acquire_capacity").entered();

        self.transcript.prompt(CAPACITY_PROMPT)?;
        loop {
            let token = self.read_token(|| "maximum array size".to_string())?;
            match parse_capacity(&token) {
                Ok(capacity) => {
                    debug!(capacity = capacity.get(), "capacity accepted");
                    return Ok(capacity);
                }
                Err(rejection) => {
                    debug!(input = %token, "capacity rejected");
                    self.transcript.prompt(&rejection.to_string())?;
                    self.source.discard_line();
                }
            }
        }
    }

    /// Returns the filled sequence and the number of rejected entry tokens.
    pub fn collect(&mut self, capacity: Capacity) -> Result<(AcceptedSequence, usize)> {
        let _span = info_span!("collect", capacity = capacity.get()).entered();

        let bounds = self.bounds;
        let mut sequence = AcceptedSequence::with_capacity(capacity)?;
        if u64::try_from(capacity.get()).unwrap_or(u64::MAX) > bounds.width() {
            warn!(
                capacity = capacity.get(),
                distinct = bounds.width(),
                "capacity exceeds the number of distinct values in range; collection cannot finish"
            );
        }

        self.transcript.line(&format!(
            "Enter up to {capacity} unique numbers between {} and {}:",
            bounds.min(),
            bounds.max()
        ))?;

        let mut rejected = 0;
        while !sequence.is_full() {
            let position = sequence.next_position();
            self.transcript.prompt(&format!("Number {position}: "))?;
            let token = self.read_token(|| format!("Number {position}"))?;

            match parse_entry(&token).and_then(|value| sequence.accept(value, &bounds)) {
                Ok(()) => trace!(position, value = %token, "entry accepted"),
                Err(rejection) if rejection.is_recoverable() => {
                    debug!(position, input = %token, reason = ?rejection, "entry rejected");
                    rejected += 1;
                    self.transcript.line(&rejection.to_string())?;
                    if rejection.discards_line() {
                        self.source.discard_line();
                    }
                }
                Err(other) => return Err(other.into()),
            }
        }

        Ok((sequence, rejected))
    }

    pub fn report(&mut self, sequence: &AcceptedSequence) -> Result<()> {
        self.transcript.line("")?;
        self.transcript.line(&format!("Final array: {sequence}"))
    }

    fn read_token(&mut self, awaiting: impl FnOnce() -> String) -> Result<String> {
        match self.source.next_token()? {
            Some(token) => Ok(token),
            None => Err(ApplicationError::InputExhausted { awaiting: awaiting() }.into()),
        }
    }
}
