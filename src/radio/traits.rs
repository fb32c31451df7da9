use core::fmt;

use heapless::Vec;

use crate::config::device::{DataRate, JoinMode, LinkCheckConfig, ManualSession, OtaIdentity};

/// Maximum application payload size
pub const MAX_PAYLOAD_SIZE: usize = 242;

/// Downlink payload buffer
pub type Payload = Vec<u8, MAX_PAYLOAD_SIZE>;

/// Failure status reported by the radio stack
///
/// Success (`0`) is not a `ReturnCode`; stack calls return `Ok(())` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReturnCode {
    /// Invalid parameter
    InvalidParam,
    /// Transmission failed
    TxError,
    /// Reception failed
    RxError,
    /// Join failed
    JoinError,
    /// Operation timed out
    Timeout,
    /// No network session
    NotJoined,
    /// Encryption is disabled
    EncryptionDisabled,
    /// No channel free for transmission
    NoFreeChannel,
    /// Stack is in test mode
    TestMode,
    /// No channel enabled
    NoEnabledChannel,
    /// Aggregated duty cycle limit reached
    AggregatedDutyCycle,
    /// Payload too large for the data rate
    MaxPayloadExceeded,
    /// Listen-before-talk found the channel busy
    LbtChannelBusy,
    /// Stack is busy
    NotIdle,
    /// Any code the stack doesn't define, with its raw value
    Error(i32),
}

impl ReturnCode {
    /// Convert a raw status code, `0` meaning success
    pub fn check(code: i32) -> Result<(), ReturnCode> {
        let rc = match code {
            0 => return Ok(()),
            -1 => ReturnCode::InvalidParam,
            -2 => ReturnCode::TxError,
            -3 => ReturnCode::RxError,
            -4 => ReturnCode::JoinError,
            -5 => ReturnCode::Timeout,
            -6 => ReturnCode::NotJoined,
            -7 => ReturnCode::EncryptionDisabled,
            -8 => ReturnCode::NoFreeChannel,
            -9 => ReturnCode::TestMode,
            -10 => ReturnCode::NoEnabledChannel,
            -11 => ReturnCode::AggregatedDutyCycle,
            -12 => ReturnCode::MaxPayloadExceeded,
            -13 => ReturnCode::LbtChannelBusy,
            -14 => ReturnCode::NotIdle,
            _ => ReturnCode::Error(code),
        };
        Err(rc)
    }

    /// Raw status code
    pub fn code(&self) -> i32 {
        match self {
            ReturnCode::InvalidParam => -1,
            ReturnCode::TxError => -2,
            ReturnCode::RxError => -3,
            ReturnCode::JoinError => -4,
            ReturnCode::Timeout => -5,
            ReturnCode::NotJoined => -6,
            ReturnCode::EncryptionDisabled => -7,
            ReturnCode::NoFreeChannel => -8,
            ReturnCode::TestMode => -9,
            ReturnCode::NoEnabledChannel => -10,
            ReturnCode::AggregatedDutyCycle => -11,
            ReturnCode::MaxPayloadExceeded => -12,
            ReturnCode::LbtChannelBusy => -13,
            ReturnCode::NotIdle => -14,
            ReturnCode::Error(code) => *code,
        }
    }

    /// Human-readable description
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnCode::InvalidParam => "Invalid Parameter",
            ReturnCode::TxError => "Transmit Error",
            ReturnCode::RxError => "Receive Error",
            ReturnCode::JoinError => "Join Error",
            ReturnCode::Timeout => "Timeout",
            ReturnCode::NotJoined => "Not Joined",
            ReturnCode::EncryptionDisabled => "Encryption Disabled",
            ReturnCode::NoFreeChannel => "No Free Channel",
            ReturnCode::TestMode => "Test Mode",
            ReturnCode::NoEnabledChannel => "No Enabled Channel",
            ReturnCode::AggregatedDutyCycle => "Aggregated Duty Cycle",
            ReturnCode::MaxPayloadExceeded => "Max Payload Exceeded",
            ReturnCode::LbtChannelBusy => "LBT Channel Busy",
            ReturnCode::NotIdle => "Not Idle",
            ReturnCode::Error(_) => "Unknown Error",
        }
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.code(), self.as_str())
    }
}

/// Wake-up source for sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeMode {
    /// Wake when the RTC alarm fires
    Rtc {
        /// Sleep duration in seconds
        seconds: u32,
    },
    /// Wake on the external wake pin only
    Interrupt,
    /// Whichever comes first
    RtcOrInterrupt {
        /// Sleep duration in seconds
        seconds: u32,
    },
}

/// LoRaWAN radio stack interface
///
/// Join procedures, MAC/PHY handling, session persistence and sleep
/// sequencing are all done behind this trait.
pub trait Dot {
    /// Version of the underlying library
    fn library_version(&self) -> u32;

    /// Whether the device woke from standby (deep sleep)
    fn standby_flag(&self) -> bool;

    /// Restore the default configuration
    fn reset_config(&mut self);

    /// Drop the current network session
    fn reset_network_session(&mut self);

    /// Restore the network session saved in NVM
    fn restore_network_session(&mut self);

    /// Persist the configuration
    fn save_config(&mut self) -> Result<(), ReturnCode>;

    /// Get the network join mode
    fn join_mode(&self) -> JoinMode;

    /// Set the network join mode
    fn set_join_mode(&mut self, mode: JoinMode) -> Result<(), ReturnCode>;

    /// Configure a manually provisioned session
    fn update_manual_config(&mut self, session: &ManualSession) -> Result<(), ReturnCode>;

    /// Configure the over-the-air identity
    fn update_ota_config(&mut self, identity: &OtaIdentity) -> Result<(), ReturnCode>;

    /// Configure network link checks
    fn update_link_check_config(&mut self, config: &LinkCheckConfig) -> Result<(), ReturnCode>;

    /// Set the transmission power in dBm
    fn set_tx_power(&mut self, power: u8) -> Result<(), ReturnCode>;

    /// Set the uplink data rate
    fn set_tx_data_rate(&mut self, data_rate: DataRate) -> Result<(), ReturnCode>;

    /// Whether a network session is established
    fn network_joined(&self) -> bool;

    /// Join the network
    fn join_network(&mut self) -> Result<(), ReturnCode>;

    /// Send an uplink
    fn send(&mut self, data: &[u8]) -> Result<(), ReturnCode>;

    /// Receive the downlink of the last uplink, if any
    fn recv(&mut self, data: &mut Payload) -> Result<(), ReturnCode>;

    /// Enter sleep until the wake condition is met
    fn sleep(&mut self, wake: WakeMode, deep_sleep: bool);

    /// Read from user NVM
    /// Returns `false` if nothing could be read
    fn nvm_read(&mut self, addr: u16, buffer: &mut [u8]) -> bool;

    /// Write to user NVM
    fn nvm_write(&mut self, addr: u16, data: &[u8]) -> bool;
}
