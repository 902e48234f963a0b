// crates/infra/src/console/writer.rs
use std::io::Write;

use unique_collector_ports::transcript::Transcript;
use unique_collector_shared_kernel::{InfrastructureError, Result};

/// `Transcript` backed by any writer; prompts are flushed so they show before a blocking read.
pub struct WriterTranscript<W> {
    out: W,
}

impl<W: Write> WriterTranscript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_failed(source: std::io::Error) -> InfrastructureError {
    InfrastructureError::OutputWrite { source }
}

impl<W: Write> Transcript for WriterTranscript<W> {
    fn prompt(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).map_err(write_failed)?;
        self.out.flush().map_err(write_failed)?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").map_err(write_failed)?;
        Ok(())
    }
}
