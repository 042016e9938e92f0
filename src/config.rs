//! Runtime configuration for the vanity address generator.

use std::path::PathBuf;

use clap::Parser;

use crate::crypto::{is_base58_char, NetworkProfile};
use crate::matcher::MatchPosition;

/// Longest anchored pattern a 35-character address can hold after its
/// 2-character prefix.
const MAX_PATTERN_LEN: usize = 33;

/// Substituted when the requested pattern is blank.
pub const DEFAULT_PATTERN: &str = "FLUX";

/// FLUX Vanity Address Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address type: t1 (Zelcore) or t3 (SSP)
    #[arg(short = 'a', long, default_value = "t1")]
    pub network: NetworkProfile,

    /// Pattern to search for (base58 characters; blank falls back to "FLUX")
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Pattern position: anchored (right after t1/t3) or anywhere
    #[arg(short = 't', long, default_value = "anchored")]
    pub position: MatchPosition,

    /// Case sensitive matching
    #[arg(short = 'c', long, default_value = "false")]
    pub case_sensitive: bool,

    /// Number of worker threads (default: CPU cores minus one)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,

    /// File the found key is appended to
    #[arg(short = 'o', long, default_value = "found_addresses.txt")]
    pub output: PathBuf,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count minus one
    /// (a core is left for the coordinator and reporter).
    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(|| num_cpus::get().saturating_sub(1))
            .max(1)
    }

    /// Returns the pattern to search for, substituting the default when
    /// the input is blank. Workers never see an empty pattern.
    pub fn effective_pattern(&self) -> &str {
        let trimmed = self.pattern.trim();
        if trimmed.is_empty() {
            DEFAULT_PATTERN
        } else {
            trimmed
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pattern = self.effective_pattern();

        // Every pattern character must be producible by the base58
        // alphabet under the selected case mode, otherwise the search
        // can never terminate.
        let representable = |c: char| {
            if self.case_sensitive {
                is_base58_char(c)
            } else {
                is_base58_char(c.to_ascii_lowercase()) || is_base58_char(c.to_ascii_uppercase())
            }
        };

        if let Some(bad) = pattern.chars().find(|&c| !representable(c)) {
            return Err(ConfigError::InvalidPattern(format!(
                "'{}' cannot appear in a base58 address{}",
                bad,
                if self.case_sensitive {
                    " (case-sensitive)"
                } else {
                    ""
                }
            )));
        }

        if pattern.len() > MAX_PATTERN_LEN {
            return Err(ConfigError::InvalidPattern(format!(
                "Pattern cannot be longer than {} characters (address body)",
                MAX_PATTERN_LEN
            )));
        }

        if self.report_interval == 0 {
            return Err(ConfigError::InvalidInterval);
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Report interval must be at least 1 second")]
    InvalidInterval,
}
