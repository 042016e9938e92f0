//! FLUX network profiles.
//!
//! FLUX transparent addresses come in two flavors, distinguished by a
//! 2-byte version tag prepended to the script hash before base58check
//! encoding:
//! - Zelcore wallet addresses, version `0x1CB8`, displayed as `t1...`
//! - SSP (P2SH) addresses, version `0x1CBD`, displayed as `t3...`

use std::str::FromStr;

/// Length of the human-readable address prefix ("t1" or "t3").
pub const PREFIX_LEN: usize = 2;

/// Selects one of the two FLUX address encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkProfile {
    /// Zelcore P2PKH-style address, prefix `t1`
    #[default]
    Zelcore,
    /// SSP P2SH address, prefix `t3`
    Ssp,
}

impl NetworkProfile {
    /// Returns the 2-byte version tag prepended to the address payload.
    #[inline]
    pub const fn version_bytes(self) -> [u8; 2] {
        match self {
            NetworkProfile::Zelcore => [0x1C, 0xB8],
            NetworkProfile::Ssp => [0x1C, 0xBD],
        }
    }

    /// Returns the address prefix this version tag encodes to.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            NetworkProfile::Zelcore => "t1",
            NetworkProfile::Ssp => "t3",
        }
    }

    /// Returns a human-readable label for result output.
    pub const fn label(self) -> &'static str {
        match self {
            NetworkProfile::Zelcore => "Zelcore (t1)",
            NetworkProfile::Ssp => "SSP (t3)",
        }
    }
}

impl FromStr for NetworkProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t1" | "zelcore" | "1" => Ok(NetworkProfile::Zelcore),
            "t3" | "ssp" | "2" => Ok(NetworkProfile::Ssp),
            _ => Err(format!("Unknown network profile: {}", s)),
        }
    }
}

impl std::fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}
