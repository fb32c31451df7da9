//! Example device applications
//!
//! Two complete duty cycles built on the provisioning functions:
//! - [`ManualApp`]: ABP session, NVM-backed uplink counter, downlink-driven LED
//! - [`AutoOtaApp`]: over-the-air join, light sensor uplinks
//!
//! All hardware is passed in as handles, nothing is global.

/// Auto OTA application
pub mod auto_ota;

/// Manual (ABP) application
pub mod manual;

pub use auto_ota::{AutoOtaApp, AutoOtaSettings};
pub use manual::{ManualApp, ManualSettings};

use crate::radio::traits::Dot;

/// NVM address of the application state
pub const STATE_NVM_ADDR: u16 = 0x100;

/// Ambient light sensor
pub trait LightSensor {
    /// Error type for sensor operations
    type Error;

    /// Bring the sensor into continuous sampling mode
    fn enable(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Latest 16-bit light sample
    fn read_light(&mut self) -> nb::Result<u16, Self::Error>;

    /// Put the sensor into its low power state
    fn power_down(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Application state kept in NVM across resets and deep sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ApplicationState {
    /// Uplink counter
    pub counter: u16,
}

impl ApplicationState {
    /// Size in NVM
    pub const SIZE: usize = 2;

    /// Serialize for NVM
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.counter.to_le_bytes()
    }

    /// Deserialize from NVM
    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self {
            counter: u16::from_le_bytes(bytes),
        }
    }

    /// Read the state from NVM, zeroed if nothing was stored
    pub fn load<D: Dot + ?Sized>(dot: &mut D) -> Self {
        let mut bytes = [0u8; Self::SIZE];
        if dot.nvm_read(STATE_NVM_ADDR, &mut bytes) {
            Self::from_bytes(bytes)
        } else {
            Self::default()
        }
    }

    /// Write the state to NVM
    pub fn store<D: Dot + ?Sized>(&self, dot: &mut D) -> bool {
        dot.nvm_write(STATE_NVM_ADDR, &self.to_bytes())
    }
}
