//! Network credential derivation
//!
//! Over-the-air credentials can be given either as a raw network ID and key
//! or as a human-readable network name and passphrase:
//! - network ID = CRC-64 of the network name
//! - network key = AES-CMAC of the network passphrase
//!
//! Only one of the two forms should be configured at a time.

use aes::cipher::generic_array::GenericArray;
use aes::Aes128;
use cmac::{Cmac, Mac};
use crc::{Crc, CRC_64_ECMA_182};

use crate::config::device::{AESKey, EUI64};

/// Block size for AES-128
const BLOCK_SIZE: usize = 16;

/// CRC used to derive network IDs from names
const CRC64: Crc<u64> = Crc::<u64>::new(&CRC_64_ECMA_182);

/// Key used to derive network keys from passphrases
const PASSPHRASE_KEY: [u8; BLOCK_SIZE] = [0; BLOCK_SIZE];

/// Compute AES-128-CMAC (RFC 4493)
///
/// # Arguments
/// * `key` - AES key
/// * `data` - Message to authenticate
pub fn cmac(key: &[u8; BLOCK_SIZE], data: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut mac = <Cmac<Aes128> as cmac::digest::KeyInit>::new(GenericArray::from_slice(key));
    mac.update(data);
    let tag = mac.finalize().into_bytes();

    let mut out = [0u8; BLOCK_SIZE];
    out.copy_from_slice(&tag);
    out
}

/// Derive the network ID (application EUI) from a network name
pub fn network_id_from_name(name: &str) -> EUI64 {
    EUI64::new(CRC64.checksum(name.as_bytes()).to_be_bytes())
}

/// Derive the network key (application key) from a network passphrase
pub fn network_key_from_passphrase(passphrase: &str) -> AESKey {
    AESKey::new(cmac(&PASSPHRASE_KEY, passphrase.as_bytes()))
}
