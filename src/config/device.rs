use core::fmt;
use core::str::FromStr;

use super::hex::{decode_hex, CredentialError};

macro_rules! credential {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name([u8; $len]);

        impl $name {
            /// Size in bytes
            pub const SIZE: usize = $len;

            /// Wrap raw bytes
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Raw bytes in transmission order
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = CredentialError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode_hex::<$len>(s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for byte in &self.0 {
                    write!(f, "{:02X}", byte)?;
                }
                Ok(())
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }
    };
}

credential!(
    /// EUI-64 (8 bytes)
    EUI64,
    8
);
credential!(
    /// AES-128 key (16 bytes)
    AESKey,
    16
);
credential!(
    /// Device Address (4 bytes)
    DevAddr,
    4
);

/// Network join mode of the radio stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum JoinMode {
    /// Session provisioned by hand (ABP)
    Manual = 0,
    /// Over-the-air join on request
    Ota = 1,
    /// Over-the-air join, session kept by the stack across sleep
    AutoOta = 2,
    /// Peer-to-peer, no network server
    PeerToPeer = 3,
}

impl JoinMode {
    /// Name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinMode::Manual => "MANUAL",
            JoinMode::Ota => "OTA",
            JoinMode::AutoOta => "AUTO_OTA",
            JoinMode::PeerToPeer => "PEER_TO_PEER",
        }
    }
}

/// Uplink data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// Spreading factor 12 (DR0 in EU868)
    SF12,
    /// Spreading factor 11
    SF11,
    /// Spreading factor 10
    SF10,
    /// Spreading factor 9
    SF9,
    /// Spreading factor 8
    SF8,
    /// Spreading factor 7
    SF7,
}

impl DataRate {
    /// Get spreading factor
    pub fn spreading_factor(&self) -> u8 {
        match self {
            DataRate::SF12 => 12,
            DataRate::SF11 => 11,
            DataRate::SF10 => 10,
            DataRate::SF9 => 9,
            DataRate::SF8 => 8,
            DataRate::SF7 => 7,
        }
    }
}

/// Manually provisioned (ABP) session, as pushed to the radio stack
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ManualSession {
    /// Device address
    pub dev_addr: DevAddr,
    /// Network session key
    pub nwk_skey: AESKey,
    /// Application session key
    pub app_skey: AESKey,
    /// Initial uplink frame counter
    pub fcnt_seed: u32,
    /// Replace a session the stack already holds
    pub replace_session: bool,
    /// Request acknowledgment for uplinks
    pub ack: bool,
}

impl ManualSession {
    /// Fresh session starting at frame counter 0, replacing any stored one
    pub fn new(dev_addr: DevAddr, nwk_skey: AESKey, app_skey: AESKey, ack: bool) -> Self {
        Self {
            dev_addr,
            nwk_skey,
            app_skey,
            fcnt_seed: 0,
            replace_session: true,
            ack,
        }
    }
}

/// Over-the-air identity, as pushed to the radio stack
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OtaIdentity {
    /// Application EUI (network ID)
    pub app_eui: EUI64,
    /// Application key (network key)
    pub app_key: AESKey,
    /// Frequency sub-band, only relevant for 915 MHz bands (0 = all)
    pub frequency_sub_band: u8,
    /// Public network sync word
    pub public_network: bool,
    /// Request acknowledgment for uplinks
    pub ack: bool,
}

impl OtaIdentity {
    /// Identity on all sub-bands of a public network
    pub fn new(app_eui: EUI64, app_key: AESKey, ack: bool) -> Self {
        Self {
            app_eui,
            app_key,
            frequency_sub_band: 0,
            public_network: true,
            ack,
        }
    }
}

/// Network link check configuration
///
/// The link is checked every `count` uplinks; after `threshold` failed
/// checks the device is considered disconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkCheckConfig {
    /// Uplinks between link checks
    pub count: u8,
    /// Failed checks before the link is declared lost
    pub threshold: u8,
}

impl Default for LinkCheckConfig {
    fn default() -> Self {
        Self {
            count: 3,
            threshold: 5,
        }
    }
}
