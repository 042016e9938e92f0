//! FLUX address representation and base58check encoding.

use std::fmt;

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use super::NetworkProfile;

/// Length of the base58check checksum in bytes.
const CHECKSUM_LEN: usize = 4;

/// A base58check-encoded FLUX address.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Encodes a 20-byte script hash as an address for the given network.
    pub fn from_script_hash(script_hash: &[u8; 20], profile: NetworkProfile) -> Self {
        let mut payload = [0u8; 22];
        payload[..2].copy_from_slice(&profile.version_bytes());
        payload[2..].copy_from_slice(script_hash);
        Self(base58check_encode(&payload))
    }

    /// Returns the encoded address string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes a base58check string and verifies its embedded checksum,
    /// returning the payload (version bytes + script hash).
    pub fn decode_check(encoded: &str) -> Result<Vec<u8>, AddressError> {
        let data = bs58::decode(encoded)
            .into_vec()
            .map_err(|_| AddressError::InvalidEncoding)?;

        if data.len() <= CHECKSUM_LEN {
            return Err(AddressError::TooShort);
        }

        let (payload, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
        if double_sha256(payload)[..CHECKSUM_LEN] != *checksum {
            return Err(AddressError::ChecksumMismatch);
        }

        Ok(payload.to_vec())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("not a valid base58 string")]
    InvalidEncoding,
    #[error("decoded payload shorter than checksum")]
    TooShort,
    #[error("checksum mismatch")]
    ChecksumMismatch,
}

/// SHA-256 followed by RIPEMD-160, the 20-byte "hash160" digest.
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}

/// Double SHA-256, used for the address checksum.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// Appends the 4-byte double-SHA-256 checksum and base58-encodes the
/// result. Leading zero bytes encode as leading '1' characters.
fn base58check_encode(payload: &[u8]) -> String {
    let checksum = double_sha256(payload);
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(data).into_string()
}

/// Returns true if the character appears in the base58 alphabet.
pub fn is_base58_char(c: char) -> bool {
    c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash160_known_vector() {
        // hash160 of the compressed generator point (secret key = 1)
        let compressed =
            hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
                .unwrap();
        assert_eq!(
            hex::encode(hash160(&compressed)),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn test_address_prefix() {
        let script_hash = [0u8; 20];
        let t1 = Address::from_script_hash(&script_hash, NetworkProfile::Zelcore);
        let t3 = Address::from_script_hash(&script_hash, NetworkProfile::Ssp);
        assert!(t1.as_str().starts_with("t1"));
        assert!(t3.as_str().starts_with("t3"));
    }

    #[test]
    fn test_decode_check_roundtrip() {
        let script_hash: [u8; 20] = hex::decode("cd7b44d0b03f2d026d1e586d7ae18903b0d385f6")
            .unwrap()
            .try_into()
            .unwrap();
        let addr = Address::from_script_hash(&script_hash, NetworkProfile::Zelcore);

        let payload = Address::decode_check(addr.as_str()).unwrap();
        assert_eq!(&payload[..2], &[0x1C, 0xB8]);
        assert_eq!(&payload[2..], &script_hash);
    }

    #[test]
    fn test_decode_check_rejects_corruption() {
        let script_hash = [0x42u8; 20];
        let addr = Address::from_script_hash(&script_hash, NetworkProfile::Ssp);

        // Flip each character to a different base58 character in turn;
        // every corruption must break the checksum.
        let original = addr.as_str();
        for i in 0..original.len() {
            let mut corrupted: Vec<char> = original.chars().collect();
            corrupted[i] = if corrupted[i] == '2' { '3' } else { '2' };
            let corrupted: String = corrupted.into_iter().collect();
            if corrupted == original {
                continue;
            }
            assert_eq!(
                Address::decode_check(&corrupted),
                Err(AddressError::ChecksumMismatch),
                "corruption at index {} went undetected",
                i
            );
        }
    }

    #[test]
    fn test_decode_check_rejects_garbage() {
        assert_eq!(
            Address::decode_check("t1-not-base58-0OIl"),
            Err(AddressError::InvalidEncoding)
        );
        assert_eq!(Address::decode_check("2g"), Err(AddressError::TooShort));
    }

    #[test]
    fn test_is_base58_char() {
        assert!(is_base58_char('1'));
        assert!(is_base58_char('z'));
        assert!(is_base58_char('L'));
        assert!(!is_base58_char('0'));
        assert!(!is_base58_char('O'));
        assert!(!is_base58_char('I'));
        assert!(!is_base58_char('l'));
        assert!(!is_base58_char('-'));
    }
}
