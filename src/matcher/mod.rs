//! Pattern matching for FLUX addresses.
//!
//! Supports two placement rules:
//! - Anchored: match immediately after the t1/t3 network prefix
//! - Anywhere: match anywhere in the address

mod pattern;

pub use pattern::{MatchPosition, MatchResult, Pattern};
