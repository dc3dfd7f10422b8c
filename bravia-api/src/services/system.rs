use std::sync::Arc;

use rpc_client::Empty;
use serde::{Deserialize, Serialize};

use crate::client::ClientCore;
use crate::error::Result;
use crate::service::ServicePath;

/// Power state reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    Active,
    Standby,
    /// Any state this client does not recognize
    #[serde(other)]
    Unknown,
}

/// Response payload of the `getPowerStatus` method
#[derive(Debug, Clone, Deserialize)]
pub struct PowerStatus {
    pub status: PowerState,
}

/// Handles requests related to system state, such as power status
pub struct SystemService {
    core: Arc<ClientCore>,
}

impl SystemService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Get the power status of the TV
    pub fn get_power_status(&self) -> Result<PowerStatus> {
        let (status,): (PowerStatus,) = self.core.call(
            ServicePath::System,
            "getPowerStatus",
            "1.0",
            Empty::default(),
        )?;
        Ok(status)
    }

    /// Turn the TV on or off
    pub fn set_power_status(&self, status: bool) -> Result<()> {
        #[derive(Serialize)]
        struct Params {
            status: bool,
        }

        let _: Empty = self.core.call(
            ServicePath::System,
            "setPowerStatus",
            "1.0",
            (Params { status },),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_state_parses_known_and_unknown() {
        let state: PowerState = serde_json::from_str(r#""active""#).unwrap();
        assert_eq!(state, PowerState::Active);

        let state: PowerState = serde_json::from_str(r#""standby""#).unwrap();
        assert_eq!(state, PowerState::Standby);

        let state: PowerState = serde_json::from_str(r#""shuttingDown""#).unwrap();
        assert_eq!(state, PowerState::Unknown);
    }

    #[test]
    fn test_power_state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PowerState::Active).unwrap(), r#""active""#);
        assert_eq!(serde_json::to_string(&PowerState::Unknown).unwrap(), r#""unknown""#);
    }
}
