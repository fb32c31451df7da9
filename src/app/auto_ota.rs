use super::LightSensor;
use crate::config::device::{JoinMode, LinkCheckConfig, OtaIdentity};
use crate::provision::{self, OtaCredentials, ProvisionError};
use crate::radio::traits::{Dot, WakeMode};

/// Default sleep between uplinks in seconds
pub const SLEEP_SECONDS: u32 = 300;

/// Auto OTA application settings
///
/// These must match the settings on your gateway. The frequency sub-band is
/// only relevant for the 915 MHz bands.
#[derive(Debug, Clone)]
pub struct AutoOtaSettings<'a> {
    /// Network credentials
    pub credentials: OtaCredentials<'a>,
    /// Frequency sub-band (0 = all)
    pub frequency_sub_band: u8,
    /// Public network sync word
    pub public_network: bool,
    /// Request acknowledgment for uplinks
    pub ack: bool,
    /// Network link checks
    pub link_check: LinkCheckConfig,
    /// Use deep sleep (IOs float, RAM lost, restart on wake)
    pub deep_sleep: bool,
    /// Wake-up source
    pub wake: WakeMode,
}

impl Default for AutoOtaSettings<'static> {
    fn default() -> Self {
        Self {
            credentials: OtaCredentials::IdKey {
                network_id: "BE7A000000000393",
                network_key: "4A117B0F373CA822D2316E4B732F9985",
            },
            frequency_sub_band: 0,
            public_network: true,
            ack: false,
            link_check: LinkCheckConfig::default(),
            deep_sleep: true,
            wake: WakeMode::RtcOrInterrupt {
                seconds: SLEEP_SECONDS,
            },
        }
    }
}

/// OTA device sending light sensor samples
pub struct AutoOtaApp<D: Dot, S: LightSensor> {
    dot: D,
    sensor: S,
    deep_sleep: bool,
    wake: WakeMode,
}

impl<D: Dot, S: LightSensor> AutoOtaApp<D, S> {
    /// Configure the radio stack
    ///
    /// Waking from deep sleep skips configuration; in AUTO_OTA mode the stack
    /// restores its own session.
    pub fn setup(mut dot: D, sensor: S, settings: &AutoOtaSettings<'_>) -> Result<Self, ProvisionError> {
        if !dot.standby_flag() {
            info!("library version: {}", dot.library_version());

            // start from a well-known state
            info!("defaulting Dot configuration");
            dot.reset_config();
            dot.reset_network_session();

            let (app_eui, app_key) = settings.credentials.resolve()?;
            let identity = OtaIdentity {
                app_eui,
                app_key,
                frequency_sub_band: settings.frequency_sub_band,
                public_network: settings.public_network,
                ack: settings.ack,
            };

            // in AUTO_OTA mode the session is saved across sleep
            if dot.join_mode() != JoinMode::AutoOta {
                info!("changing network join mode to AUTO_OTA");
                provision::set_join_mode(&mut dot, JoinMode::AutoOta)?;
            }
            provision::update_ota_config(&mut dot, &identity)?;

            debug!(
                "link check every {} packets, threshold {}",
                settings.link_check.count,
                settings.link_check.threshold
            );
            if let Err(rc) = dot.update_link_check_config(&settings.link_check) {
                error!("failed to set link check config {}:{}", rc.code(), rc.as_str());
            }

            info!("saving configuration");
            if dot.save_config().is_err() {
                error!("failed to save configuration");
            }
        }

        Ok(Self {
            dot,
            sensor,
            deep_sleep: settings.deep_sleep,
            wake: settings.wake,
        })
    }

    /// Run one duty cycle: join if needed, sample, send, sleep
    pub fn cycle(&mut self) {
        if !self.dot.network_joined() {
            if let Err(rc) = self.dot.join_network() {
                error!("failed to join network {}:{}", rc.code(), rc.as_str());
                self.dot.sleep(self.wake, self.deep_sleep);
                return;
            }
        }

        if self.sensor.enable().is_err() {
            warn!("failed to configure light sensor");
        }

        match nb::block!(self.sensor.read_light()) {
            Ok(light) => {
                info!("light: {} [{:#x}]", light, light);
                if let Err(rc) = self.dot.send(&light.to_be_bytes()) {
                    error!("failed to send {}:{}", rc.code(), rc.as_str());
                }
            }
            Err(_) => error!("failed to read light sensor"),
        }

        if self.sensor.power_down().is_err() {
            warn!("failed to power down light sensor");
        }

        self.dot.sleep(self.wake, self.deep_sleep);
    }

    /// Run duty cycles forever
    pub fn run(mut self) -> ! {
        loop {
            self.cycle();
        }
    }

    /// Get radio stack
    pub fn dot(&self) -> &D {
        &self.dot
    }

    /// Get mutable radio stack
    pub fn dot_mut(&mut self) -> &mut D {
        &mut self.dot
    }

    /// Get light sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Release the handles
    pub fn release(self) -> (D, S) {
        (self.dot, self.sensor)
    }
}
