#![allow(dead_code)]

use core::convert::Infallible;

use dot_provision::{
    app::LightSensor,
    config::device::{DataRate, JoinMode, LinkCheckConfig, ManualSession, OtaIdentity},
    radio::traits::{Dot, Payload, ReturnCode, WakeMode},
};
use embedded_hal::digital::v2::OutputPin;
use heapless::Vec;

/// Recorded radio stack call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ResetConfig,
    ResetNetworkSession,
    RestoreNetworkSession,
    SaveConfig,
    SetJoinMode(JoinMode),
    UpdateManualConfig(ManualSession),
    UpdateOtaConfig(OtaIdentity),
    UpdateLinkCheckConfig(LinkCheckConfig),
    SetTxPower(u8),
    SetTxDataRate(DataRate),
    JoinNetwork,
    Send(Vec<u8, 16>),
    Recv,
    Sleep(WakeMode, bool),
    NvmRead(u16),
    NvmWrite(u16, Vec<u8, 16>),
}

/// Mock radio stack for testing
pub struct MockDot {
    /// Every call in order
    pub calls: Vec<Call, 64>,
    pub standby: bool,
    pub join_mode: JoinMode,
    pub joined: bool,
    pub set_join_mode_result: Result<(), ReturnCode>,
    pub update_config_result: Result<(), ReturnCode>,
    pub tx_power_result: Result<(), ReturnCode>,
    pub data_rate_result: Result<(), ReturnCode>,
    pub link_check_result: Result<(), ReturnCode>,
    pub save_result: Result<(), ReturnCode>,
    pub join_result: Result<(), ReturnCode>,
    pub send_result: Result<(), ReturnCode>,
    pub recv_result: Result<(), ReturnCode>,
    /// Data returned by the next receive call
    pub downlink: Option<Payload>,
    /// Single NVM slot
    pub nvm: Option<(u16, Vec<u8, 16>)>,
}

impl MockDot {
    /// Create new mock radio stack
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            standby: false,
            join_mode: JoinMode::Ota,
            joined: false,
            set_join_mode_result: Ok(()),
            update_config_result: Ok(()),
            tx_power_result: Ok(()),
            data_rate_result: Ok(()),
            link_check_result: Ok(()),
            save_result: Ok(()),
            join_result: Ok(()),
            send_result: Ok(()),
            recv_result: Ok(()),
            downlink: None,
            nvm: None,
        }
    }

    /// Set data to be returned by next receive call
    pub fn set_downlink(&mut self, data: &[u8]) {
        let mut payload = Payload::new();
        payload.extend_from_slice(data).unwrap();
        self.downlink = Some(payload);
    }

    /// Pre-populate NVM
    pub fn set_nvm(&mut self, addr: u16, data: &[u8]) {
        self.nvm = Some((addr, Vec::from_slice(data).unwrap()));
    }

    /// Manual sessions pushed so far
    pub fn manual_configs(&self) -> impl Iterator<Item = &ManualSession> {
        self.calls.iter().filter_map(|call| match call {
            Call::UpdateManualConfig(session) => Some(session),
            _ => None,
        })
    }

    /// OTA identities pushed so far
    pub fn ota_configs(&self) -> impl Iterator<Item = &OtaIdentity> {
        self.calls.iter().filter_map(|call| match call {
            Call::UpdateOtaConfig(identity) => Some(identity),
            _ => None,
        })
    }

    /// Uplinks sent so far
    pub fn sent(&self) -> impl Iterator<Item = &[u8]> {
        self.calls.iter().filter_map(|call| match call {
            Call::Send(data) => Some(data.as_slice()),
            _ => None,
        })
    }

    /// Number of recorded calls equal to `call`
    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn record(&mut self, call: Call) {
        self.calls.push(call).unwrap();
    }
}

impl Dot for MockDot {
    fn library_version(&self) -> u32 {
        42
    }

    fn standby_flag(&self) -> bool {
        self.standby
    }

    fn reset_config(&mut self) {
        self.record(Call::ResetConfig);
    }

    fn reset_network_session(&mut self) {
        self.record(Call::ResetNetworkSession);
    }

    fn restore_network_session(&mut self) {
        self.record(Call::RestoreNetworkSession);
    }

    fn save_config(&mut self) -> Result<(), ReturnCode> {
        self.record(Call::SaveConfig);
        self.save_result
    }

    fn join_mode(&self) -> JoinMode {
        self.join_mode
    }

    fn set_join_mode(&mut self, mode: JoinMode) -> Result<(), ReturnCode> {
        self.record(Call::SetJoinMode(mode));
        if self.set_join_mode_result.is_ok() {
            self.join_mode = mode;
        }
        self.set_join_mode_result
    }

    fn update_manual_config(&mut self, session: &ManualSession) -> Result<(), ReturnCode> {
        self.record(Call::UpdateManualConfig(session.clone()));
        self.update_config_result
    }

    fn update_ota_config(&mut self, identity: &OtaIdentity) -> Result<(), ReturnCode> {
        self.record(Call::UpdateOtaConfig(identity.clone()));
        self.update_config_result
    }

    fn update_link_check_config(&mut self, config: &LinkCheckConfig) -> Result<(), ReturnCode> {
        self.record(Call::UpdateLinkCheckConfig(*config));
        self.link_check_result
    }

    fn set_tx_power(&mut self, power: u8) -> Result<(), ReturnCode> {
        self.record(Call::SetTxPower(power));
        self.tx_power_result
    }

    fn set_tx_data_rate(&mut self, data_rate: DataRate) -> Result<(), ReturnCode> {
        self.record(Call::SetTxDataRate(data_rate));
        self.data_rate_result
    }

    fn network_joined(&self) -> bool {
        self.joined
    }

    fn join_network(&mut self) -> Result<(), ReturnCode> {
        self.record(Call::JoinNetwork);
        if self.join_result.is_ok() {
            self.joined = true;
        }
        self.join_result
    }

    fn send(&mut self, data: &[u8]) -> Result<(), ReturnCode> {
        self.record(Call::Send(Vec::from_slice(data).unwrap()));
        self.send_result
    }

    fn recv(&mut self, data: &mut Payload) -> Result<(), ReturnCode> {
        self.record(Call::Recv);
        if let Some(downlink) = self.downlink.take() {
            data.extend_from_slice(&downlink).unwrap();
        }
        self.recv_result
    }

    fn sleep(&mut self, wake: WakeMode, deep_sleep: bool) {
        self.record(Call::Sleep(wake, deep_sleep));
    }

    fn nvm_read(&mut self, addr: u16, buffer: &mut [u8]) -> bool {
        self.record(Call::NvmRead(addr));
        match &self.nvm {
            Some((stored, data)) if *stored == addr && data.len() == buffer.len() => {
                buffer.copy_from_slice(data);
                true
            }
            _ => false,
        }
    }

    fn nvm_write(&mut self, addr: u16, data: &[u8]) -> bool {
        let data: Vec<u8, 16> = Vec::from_slice(data).unwrap();
        self.record(Call::NvmWrite(addr, data.clone()));
        self.nvm = Some((addr, data));
        true
    }
}

/// Mock LED
pub struct MockLed {
    pub on: bool,
}

impl MockLed {
    pub fn new() -> Self {
        Self { on: false }
    }
}

impl OutputPin for MockLed {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.on = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on = true;
        Ok(())
    }
}

/// Mock sensor error type
#[derive(Debug)]
pub struct SensorError;

/// Mock light sensor
pub struct MockSensor {
    /// Sample to report, `None` fails the read
    pub sample: Option<u16>,
    /// Number of reads reporting `WouldBlock` before the sample is ready
    pub pending_reads: u8,
    pub enabled: u8,
    pub powered_down: u8,
}

impl MockSensor {
    pub fn new(sample: u16) -> Self {
        Self {
            sample: Some(sample),
            pending_reads: 0,
            enabled: 0,
            powered_down: 0,
        }
    }
}

impl LightSensor for MockSensor {
    type Error = SensorError;

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.enabled += 1;
        Ok(())
    }

    fn read_light(&mut self) -> nb::Result<u16, Self::Error> {
        if self.pending_reads > 0 {
            self.pending_reads -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.sample.ok_or(nb::Error::Other(SensorError))
    }

    fn power_down(&mut self) -> Result<(), Self::Error> {
        self.powered_down += 1;
        Ok(())
    }
}
