//! FLUX keypair generation.

use rand::RngCore;
use secp256k1::{PublicKey, SecretKey, SECP256K1};

use super::address::hash160;
use super::{Address, NetworkProfile};

/// Represents a FLUX keypair (private key + derived address).
#[derive(Debug, Clone)]
pub struct Keypair {
    /// The private key bytes (32 bytes)
    secret_key: [u8; 32],
    /// The derived FLUX address
    address: Address,
}

impl Keypair {
    /// Generates a new random keypair for the given network.
    ///
    /// Draws 32 bytes from a cryptographically secure RNG; the zero scalar
    /// and scalars at or above the curve order are rejected by
    /// `SecretKey::from_slice` and redrawn.
    #[inline]
    pub fn generate(profile: NetworkProfile) -> Self {
        let mut rng = rand::thread_rng();
        loop {
            let mut secret_bytes = [0u8; 32];
            rng.fill_bytes(&mut secret_bytes);
            if let Ok(secret_key) = SecretKey::from_slice(&secret_bytes) {
                let public_key = PublicKey::from_secret_key(SECP256K1, &secret_key);
                return Self {
                    secret_key: secret_bytes,
                    address: Self::derive_address(&public_key, profile),
                };
            }
        }
    }

    /// Builds a keypair from an existing secret key.
    ///
    /// # Panics
    /// Panics if the secret key is invalid.
    pub fn from_secret_key(secret_bytes: [u8; 32], profile: NetworkProfile) -> Self {
        let secret_key = SecretKey::from_slice(&secret_bytes).expect("Invalid secret key");
        let public_key = PublicKey::from_secret_key(SECP256K1, &secret_key);

        Self {
            secret_key: secret_bytes,
            address: Self::derive_address(&public_key, profile),
        }
    }

    /// Derives a FLUX address from a secp256k1 public key.
    ///
    /// Process:
    /// 1. Serialize the public key in compressed form (33 bytes)
    /// 2. hash160 it to get the 20-byte public key hash
    /// 3. Wrap the hash in a P2PKH redeem script and hash160 the script
    /// 4. Base58check-encode the script hash under the network version tag
    #[inline]
    fn derive_address(public_key: &PublicKey, profile: NetworkProfile) -> Address {
        let compressed = public_key.serialize();
        let pubkey_hash = hash160(&compressed);
        let script_hash = hash160(&redeem_script(&pubkey_hash));
        Address::from_script_hash(&script_hash, profile)
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret_key)
    }

    /// Returns the private key bytes.
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.secret_key
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// P2PKH redeem script: OP_DUP OP_HASH160 PUSH20 <pubkey_hash> OP_EQUALVERIFY OP_CHECKSIG
#[inline]
fn redeem_script(pubkey_hash: &[u8; 20]) -> [u8; 25] {
    let mut script = [0u8; 25];
    script[0] = 0x76; // OP_DUP
    script[1] = 0xa9; // OP_HASH160
    script[2] = 0x14; // PUSH 20
    script[3..23].copy_from_slice(pubkey_hash);
    script[23] = 0x88; // OP_EQUALVERIFY
    script[24] = 0xac; // OP_CHECKSIG
    script
}
