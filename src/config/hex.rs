use core::fmt::{self, Write};

use heapless::String;

/// Largest credential handled by the encoder (an AES-128 key)
pub const MAX_CREDENTIAL_SIZE: usize = 16;

/// Uppercase hex rendering of a credential
pub type HexString = String<{ MAX_CREDENTIAL_SIZE * 2 }>;

/// Malformed credential string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CredentialError {
    /// Input has an odd number of characters
    OddLength,
    /// Input length doesn't match the credential size
    InvalidLength {
        /// Expected number of characters
        expected: usize,
        /// Actual number of characters
        actual: usize,
    },
    /// Input contains a character outside `[0-9A-Fa-f]`
    InvalidCharacter {
        /// Offending character
        character: char,
        /// Byte offset of the character in the input
        index: usize,
    },
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddLength => write!(f, "Odd number of hex digits"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Expected {} hex digits, got {}", expected, actual)
            }
            Self::InvalidCharacter { character, index } => {
                write!(f, "Invalid hex character {:?} at index {}", character, index)
            }
        }
    }
}

/// Decode an ASCII hex string into exactly `N` bytes.
///
/// The input must be `2 * N` characters long and only contain hex digits
/// (either case). Nothing is returned for partially valid input.
pub fn decode_hex<const N: usize>(input: &str) -> Result<[u8; N], CredentialError> {
    let actual = input.len();
    if actual % 2 != 0 {
        return Err(CredentialError::OddLength);
    }
    if actual != N * 2 {
        return Err(CredentialError::InvalidLength {
            expected: N * 2,
            actual,
        });
    }

    let mut out = [0u8; N];
    ::hex::decode_to_slice(input, &mut out).map_err(|error| match error {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            // `hex` works on bytes; report the whole character for non-ASCII input
            let (index, character) = input
                .char_indices()
                .take_while(|&(start, _)| start <= index)
                .last()
                .unwrap_or((index, c));
            CredentialError::InvalidCharacter { character, index }
        }
        ::hex::FromHexError::OddLength => CredentialError::OddLength,
        ::hex::FromHexError::InvalidStringLength => CredentialError::InvalidLength {
            expected: N * 2,
            actual,
        },
    })?;
    Ok(out)
}

/// Encode a credential as uppercase hex.
pub fn encode_hex(bytes: &[u8]) -> Result<HexString, CredentialError> {
    if bytes.len() > MAX_CREDENTIAL_SIZE {
        return Err(CredentialError::InvalidLength {
            expected: MAX_CREDENTIAL_SIZE * 2,
            actual: bytes.len() * 2,
        });
    }

    let mut out = HexString::new();
    for byte in bytes {
        write!(out, "{:02X}", byte).map_err(|_| CredentialError::InvalidLength {
            expected: MAX_CREDENTIAL_SIZE * 2,
            actual: bytes.len() * 2,
        })?;
    }
    Ok(out)
}
