//! Radio stack provisioning
//!
//! This module pushes device credentials into the radio stack and selects the
//! matching join mode:
//! - ABP: device address and session keys, join mode MANUAL
//! - OTA: application EUI and key, join mode AUTO_OTA
//!
//! Credentials are given as ASCII hex and validated before the stack is
//! touched.

use core::fmt;

use crate::config::device::{AESKey, DevAddr, JoinMode, ManualSession, OtaIdentity, EUI64};
use crate::config::hex::CredentialError;
use crate::crypto;
use crate::radio::traits::{Dot, ReturnCode};

/// Provisioning error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProvisionError {
    /// A credential string is malformed
    Credential(CredentialError),
    /// The stack rejected the join mode
    JoinMode(ReturnCode),
    /// The stack rejected the session or identity
    Config(ReturnCode),
}

impl From<CredentialError> for ProvisionError {
    fn from(error: CredentialError) -> Self {
        ProvisionError::Credential(error)
    }
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credential(e) => write!(f, "Invalid credential: {}", e),
            Self::JoinMode(rc) => write!(f, "Failed to set join mode {}", rc),
            Self::Config(rc) => write!(f, "Failed to update network config {}", rc),
        }
    }
}

/// Over-the-air network credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OtaCredentials<'a> {
    /// Network ID (16 hex digits) and network key (32 hex digits)
    IdKey {
        /// Network ID
        network_id: &'a str,
        /// Network key
        network_key: &'a str,
    },
    /// Network name and passphrase, hashed into an ID and key
    NamePhrase {
        /// Network name
        name: &'a str,
        /// Network passphrase
        passphrase: &'a str,
    },
}

impl OtaCredentials<'_> {
    /// Get the application EUI and key
    pub fn resolve(&self) -> Result<(EUI64, AESKey), CredentialError> {
        match *self {
            OtaCredentials::IdKey {
                network_id,
                network_key,
            } => Ok((network_id.parse()?, network_key.parse()?)),
            OtaCredentials::NamePhrase { name, passphrase } => Ok((
                crypto::network_id_from_name(name),
                crypto::network_key_from_passphrase(passphrase),
            )),
        }
    }
}

/// Provision a manually activated (ABP) session from hex credentials.
///
/// # Arguments
/// * `dot` - Radio stack
/// * `dev_addr` - Device address, 8 hex digits
/// * `nwk_skey` - Network session key, 32 hex digits
/// * `app_skey` - Application session key, 32 hex digits
/// * `ack` - Request acknowledgment for uplinks
pub fn initialize_personalized<D: Dot + ?Sized>(
    dot: &mut D,
    dev_addr: &str,
    nwk_skey: &str,
    app_skey: &str,
    ack: bool,
) -> Result<(), ProvisionError> {
    let nwk_skey: AESKey = nwk_skey.parse()?;
    let app_skey: AESKey = app_skey.parse()?;
    let dev_addr: DevAddr = dev_addr.parse()?;

    configure_personalized(dot, &ManualSession::new(dev_addr, nwk_skey, app_skey, ack))
}

/// Provision an over-the-air identity from hex credentials.
///
/// The identity covers all frequency sub-bands of a public network.
///
/// # Arguments
/// * `dot` - Radio stack
/// * `app_eui` - Application EUI, 16 hex digits
/// * `app_key` - Application key, 32 hex digits
/// * `ack` - Request acknowledgment for uplinks
pub fn initialize_ota<D: Dot + ?Sized>(
    dot: &mut D,
    app_eui: &str,
    app_key: &str,
    ack: bool,
) -> Result<(), ProvisionError> {
    let app_key: AESKey = app_key.parse()?;
    let app_eui: EUI64 = app_eui.parse()?;

    configure_ota(dot, &OtaIdentity::new(app_eui, app_key, ack))
}

/// Set join mode MANUAL and push a decoded session.
///
/// MANUAL mode means the device doesn't have to rejoin after sleeping.
pub fn configure_personalized<D: Dot + ?Sized>(
    dot: &mut D,
    session: &ManualSession,
) -> Result<(), ProvisionError> {
    set_join_mode(dot, JoinMode::Manual)?;

    trace!("manual session for {}", session.dev_addr);

    dot.update_manual_config(session).map_err(|rc| {
        error!("failed to update manual config {}:{}", rc.code(), rc.as_str());
        ProvisionError::Config(rc)
    })
}

/// Set join mode AUTO_OTA and push a decoded identity.
///
/// In AUTO_OTA mode the stack saves the session itself, so the device
/// doesn't have to rejoin after sleeping.
pub fn configure_ota<D: Dot + ?Sized>(
    dot: &mut D,
    identity: &OtaIdentity,
) -> Result<(), ProvisionError> {
    set_join_mode(dot, JoinMode::AutoOta)?;
    update_ota_config(dot, identity)
}

pub(crate) fn update_ota_config<D: Dot + ?Sized>(
    dot: &mut D,
    identity: &OtaIdentity,
) -> Result<(), ProvisionError> {
    dot.update_ota_config(identity).map_err(|rc| {
        error!("failed to update ota config {}:{}", rc.code(), rc.as_str());
        ProvisionError::Config(rc)
    })
}

pub(crate) fn set_join_mode<D: Dot + ?Sized>(
    dot: &mut D,
    mode: JoinMode,
) -> Result<(), ProvisionError> {
    info!("setting join mode to {}", mode.as_str());
    dot.set_join_mode(mode).map_err(|rc| {
        error!("failed to set join mode {}:{}", rc.code(), rc.as_str());
        ProvisionError::JoinMode(rc)
    })
}
