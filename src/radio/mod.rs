/// Radio stack interface
pub mod traits;

pub use traits::{Dot, Payload, ReturnCode, WakeMode, MAX_PAYLOAD_SIZE};
