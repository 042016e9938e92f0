//! # flux_vanity
//!
//! High-performance FLUX vanity address generator.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation and FLUX address derivation
//! - `matcher`: Pattern matching rules
//! - `worker`: Parallel search and pool coordination
//! - `reporter`: Periodic throughput sampling
//! - `output`: Persistent result log
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod matcher;
pub mod output;
pub mod reporter;
pub mod worker;

pub use config::Config;
pub use crypto::{Address, Keypair, NetworkProfile};
pub use matcher::{MatchPosition, MatchResult, Pattern};
pub use reporter::ProgressReporter;
pub use worker::{VanityResult, WorkerPool, SHUTDOWN_GRACE};
