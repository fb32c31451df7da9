use embedded_hal::digital::v2::OutputPin;

use super::ApplicationState;
use crate::config::device::DataRate;
use crate::provision::{self, ProvisionError};
use crate::radio::traits::{Dot, Payload, WakeMode};

/// Manual (ABP) application settings
///
/// These must match the settings on your network server.
#[derive(Debug, Clone)]
pub struct ManualSettings<'a> {
    /// Device address, 8 hex digits
    pub dev_addr: &'a str,
    /// Network session key, 32 hex digits
    pub nwk_skey: &'a str,
    /// Application session key, 32 hex digits
    pub app_skey: &'a str,
    /// Request acknowledgment for uplinks
    pub ack: bool,
    /// Transmission power in dBm
    pub tx_power: u8,
    /// Uplink data rate
    pub data_rate: DataRate,
    /// Use deep sleep (IOs float, RAM lost, restart on wake)
    pub deep_sleep: bool,
    /// Wake-up source
    pub wake: WakeMode,
}

impl Default for ManualSettings<'static> {
    fn default() -> Self {
        Self {
            dev_addr: "A80BAD2C",
            nwk_skey: "BD86A216B4DE6752938FFC6D260C5649",
            app_skey: "9A74BEA119106EEE661E20F48CD1C216",
            ack: true,
            tx_power: 20,
            data_rate: DataRate::SF10,
            deep_sleep: false,
            wake: WakeMode::Interrupt,
        }
    }
}

/// ABP device sending an NVM-backed counter
///
/// A downlink whose first byte is `1` turns the LED on, any other downlink
/// turns it off.
pub struct ManualApp<D: Dot, L: OutputPin> {
    dot: D,
    led: L,
    state: ApplicationState,
    deep_sleep: bool,
    wake: WakeMode,
}

impl<D: Dot, L: OutputPin> ManualApp<D, L> {
    /// Configure the radio stack and restore the counter
    ///
    /// A fresh boot provisions the session from `settings`; waking from deep
    /// sleep restores the session saved in NVM instead.
    pub fn setup(mut dot: D, mut led: L, settings: &ManualSettings<'_>) -> Result<Self, ProvisionError> {
        led.set_low().ok();

        if !dot.standby_flag() {
            info!("library version: {}", dot.library_version());

            // start from a well-known state
            info!("defaulting Dot configuration");
            dot.reset_config();
            dot.reset_network_session();

            info!("setting tx power to {}", settings.tx_power);
            if let Err(rc) = dot.set_tx_power(settings.tx_power) {
                error!("failed to set tx power {}:{}", rc.code(), rc.as_str());
            }

            info!("setting TX spreading factor");
            if let Err(rc) = dot.set_tx_data_rate(settings.data_rate) {
                error!("failed to set TX datarate {}:{}", rc.code(), rc.as_str());
            }

            provision::initialize_personalized(
                &mut dot,
                settings.dev_addr,
                settings.nwk_skey,
                settings.app_skey,
                settings.ack,
            )?;

            info!("saving configuration");
            if dot.save_config().is_err() {
                error!("failed to save configuration");
            }
        } else {
            info!("restoring network session from NVM");
            dot.restore_network_session();
        }

        let state = ApplicationState::load(&mut dot);
        info!("restored counter state, value is {}", state.counter);

        Ok(Self {
            dot,
            led,
            state,
            deep_sleep: settings.deep_sleep,
            wake: settings.wake,
        })
    }

    /// Run one duty cycle: count, send, receive, sleep
    pub fn cycle(&mut self) {
        self.state.counter = self.state.counter.wrapping_add(1);
        if !self.state.store(&mut self.dot) {
            warn!("failed to persist counter");
        }
        info!("new counter value is: {}", self.state.counter);

        info!("sending: {}", self.state.counter);
        if self.dot.send(&self.state.counter.to_be_bytes()).is_ok() {
            let mut data = Payload::new();
            if let Err(rc) = self.dot.recv(&mut data) {
                error!("failed to recv {}:{}", rc.code(), rc.as_str());
            }

            if let Some(&first) = data.first() {
                info!("received {} bytes: {:x}", data.len(), data.as_slice());

                if first == 1 {
                    self.led.set_high().ok();
                } else {
                    self.led.set_low().ok();
                }
            }
        }

        self.dot.sleep(self.wake, self.deep_sleep);
    }

    /// Run duty cycles forever
    pub fn run(mut self) -> ! {
        loop {
            self.cycle();
        }
    }

    /// Current counter value
    pub fn counter(&self) -> u16 {
        self.state.counter
    }

    /// Get radio stack
    pub fn dot(&self) -> &D {
        &self.dot
    }

    /// Get mutable radio stack
    pub fn dot_mut(&mut self) -> &mut D {
        &mut self.dot
    }

    /// Get LED
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Release the handles
    pub fn release(self) -> (D, L) {
        (self.dot, self.led)
    }
}
