//! Cryptographic operations for FLUX key and address generation.
//!
//! This module provides:
//! - Secure random key generation using secp256k1
//! - FLUX address derivation (hash160 + P2SH-style script hash + base58check)
//! - Network version tags for the two transparent address formats

mod address;
mod keypair;
mod network;

pub use address::{hash160, is_base58_char, Address, AddressError};
pub use keypair::Keypair;
pub use network::{NetworkProfile, PREFIX_LEN};
