// src/config.rs
use unique_collector_domain::Bounds;

use crate::args::Args;

/// Default `tracing` directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub bounds: Bounds,
    pub log_directive: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: Bounds::DEFAULT,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl From<Args> for Config {
    fn from(_args: Args) -> Self {
        Self::default()
    }
}
