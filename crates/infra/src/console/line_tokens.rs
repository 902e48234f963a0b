// crates/infra/src/console/line_tokens.rs
use std::{collections::VecDeque, io::BufRead};

use unique_collector_ports::input::TokenSource;
use unique_collector_shared_kernel::{InfrastructureError, Result};

/// Splits buffered input into whitespace-separated tokens, one line at a time.
///
/// Tokens left on the current line stay queued until consumed or discarded,
/// so `5 5 10` typed on one line answers three prompts.
pub struct LineTokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    buf: Vec<u8>,
}

impl<R: BufRead> LineTokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new(), buf: Vec::new() }
    }

    /// Reads the next line into the queue. Returns `false` at end of input.
    fn fill_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| InfrastructureError::InputRead { source })?;
        if read == 0 {
            return Ok(false);
        }
        // Invalid UTF-8 becomes replacement characters and fails to parse downstream.
        let line = String::from_utf8_lossy(&self.buf);
        self.pending.extend(line.split_whitespace().map(str::to_owned));
        Ok(true)
    }
}

impl<R: BufRead> TokenSource for LineTokenReader<R> {
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            if !self.fill_line()? {
                return Ok(None);
            }
        }
    }

    fn discard_line(&mut self) {
        self.pending.clear();
    }
}
