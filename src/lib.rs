//! LoRaWAN device provisioning for mDot-style radio stacks
//!
//! This crate configures an external LoRaWAN radio stack from human-readable
//! credentials. The stack itself (join procedure, MAC/PHY, session storage,
//! sleep) sits behind the [`radio::Dot`] trait.
//!
//! # Features
//! - Hex credential parsing with explicit errors
//! - ABP (manual) and OTA (automatic over-the-air) provisioning
//! - Network ID/key derivation from a network name and passphrase
//! - Ready-made duty cycles for an ABP counter device and an OTA sensor device
//! - `no_std`, no allocation
//!
//! # Example
//! ```no_run
//! use dot_provision::{provision, radio::Dot};
//!
//! fn configure<D: Dot>(dot: &mut D) -> Result<(), provision::ProvisionError> {
//!     provision::initialize_personalized(
//!         dot,
//!         "A80BAD2C",                         // DevAddr
//!         "BD86A216B4DE6752938FFC6D260C5649", // NwkSKey
//!         "9A74BEA119106EEE661E20F48CD1C216", // AppSKey
//!         true,
//!     )
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

/// Example device applications
pub mod app;

/// Device credentials and stack configuration
pub mod config;

/// Network credential derivation
pub mod crypto;

/// Radio stack provisioning
pub mod provision;

/// Radio stack abstraction
pub mod radio;
