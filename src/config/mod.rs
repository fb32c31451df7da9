//! Device credentials and radio stack configuration
//!
//! This module contains the types used to provision a LoRaWAN device:
//! - Credential parsing from ASCII hex
//! - Device address, key and EUI types
//! - Configuration records pushed to the radio stack

/// Credential types and stack configuration records
pub mod device;

/// Hex credential encoding
pub mod hex;

pub use device::{AESKey, DataRate, DevAddr, JoinMode, LinkCheckConfig, ManualSession, OtaIdentity, EUI64};
pub use hex::{decode_hex, encode_hex, CredentialError, HexString};
