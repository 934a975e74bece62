//! Runtime configuration.
//!
//! The chunk size governs how much of the input is analysed per pass. It is
//! an owned, heap-allocated buffer sized here rather than a fixed stack
//! array, and can be overridden through the `NALIO_CHUNK_SIZE` environment
//! variable or per invocation via the CLI.

use std::env;

/// Default chunk size: 1 MiB per read pass
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Analyser configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bytes read and analysed per pass
    pub chunk_size: usize,
}

impl Config {
    /// Creates a configuration from defaults and the environment
    ///
    /// `NALIO_CHUNK_SIZE` overrides the default when set to a positive
    /// integer; anything else is ignored.
    pub fn new() -> Self {
        let mut config = Config {
            chunk_size: DEFAULT_CHUNK_SIZE,
        };

        if let Ok(value) = env::var("NALIO_CHUNK_SIZE") {
            if let Ok(size) = value.trim().parse::<usize>() {
                if size > 0 {
                    config.chunk_size = size;
                }
            }
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
