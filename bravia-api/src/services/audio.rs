use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rpc_client::Empty;
use serde::{Deserialize, Serialize};

use crate::client::ClientCore;
use crate::error::{ApiError, Result};
use crate::service::ServicePath;

/// A volume adjustment, either absolute or relative
///
/// The device encodes the distinction in the parameter string: `"25"` sets
/// the level, `"+10"` and `"-10"` shift it. The sign prefix is what makes a
/// delta a delta, so the typed variants keep the two from being confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volume {
    /// Set the volume to an absolute level
    Absolute(u8),
    /// Increase the volume by the given number of steps
    Up(u8),
    /// Decrease the volume by the given number of steps
    Down(u8),
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Volume::Absolute(level) => write!(f, "{level}"),
            Volume::Up(steps) => write!(f, "+{steps}"),
            Volume::Down(steps) => write!(f, "-{steps}"),
        }
    }
}

impl FromStr for Volume {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        let parse = |digits: &str| {
            digits
                .parse::<u8>()
                .map_err(|_| ApiError::InvalidParameter(format!("invalid volume value '{s}'")))
        };
        match s.as_bytes().first() {
            Some(b'+') => Ok(Volume::Up(parse(&s[1..])?)),
            Some(b'-') => Ok(Volume::Down(parse(&s[1..])?)),
            Some(_) => Ok(Volume::Absolute(parse(s)?)),
            None => Err(ApiError::InvalidParameter("empty volume value".to_string())),
        }
    }
}

/// Volume and mute information for one audio target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInformation {
    pub target: String,
    pub volume: i32,
    pub mute: bool,
    pub max_volume: i32,
    pub min_volume: i32,
}

/// Handles requests related to audio, such as setting the volume and muting
pub struct AudioService {
    core: Arc<ClientCore>,
}

impl AudioService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Get volume and mute information for every audio target
    pub fn get_volume_information(&self) -> Result<Vec<VolumeInformation>> {
        let (info,): (Vec<VolumeInformation>,) = self.core.call(
            ServicePath::Audio,
            "getVolumeInformation",
            "1.0",
            Empty::default(),
        )?;
        Ok(info)
    }

    /// Set the volume of the given target, returning the new level
    ///
    /// Targets are device-defined names such as `"speaker"` or
    /// `"headphone"`; an empty target addresses all outputs.
    pub fn set_audio_volume(&self, volume: Volume, target: &str) -> Result<i32> {
        #[derive(Serialize)]
        struct Params {
            volume: String,
            target: String,
        }

        let (level,): (i32,) = self.core.call(
            ServicePath::Audio,
            "setAudioVolume",
            "1.0",
            (Params {
                volume: volume.to_string(),
                target: target.to_string(),
            },),
        )?;
        Ok(level)
    }

    /// Mute or unmute the TV
    pub fn set_audio_mute(&self, status: bool) -> Result<()> {
        #[derive(Serialize)]
        struct Params {
            status: bool,
        }

        let _: Empty = self.core.call(
            ServicePath::Audio,
            "setAudioMute",
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
    fn test_volume_encoding_keeps_sign_prefix() {
        assert_eq!(Volume::Absolute(10).to_string(), "10");
        assert_eq!(Volume::Up(10).to_string(), "+10");
        assert_eq!(Volume::Down(5).to_string(), "-5");
    }

    #[test]
    fn test_volume_round_trips_from_str() {
        assert_eq!("24".parse::<Volume>().unwrap(), Volume::Absolute(24));
        assert_eq!("+14".parse::<Volume>().unwrap(), Volume::Up(14));
        assert_eq!("-10".parse::<Volume>().unwrap(), Volume::Down(10));
    }

    #[test]
    fn test_volume_rejects_garbage() {
        assert!("".parse::<Volume>().is_err());
        assert!("loud".parse::<Volume>().is_err());
        assert!("+".parse::<Volume>().is_err());
        assert!("+300".parse::<Volume>().is_err());
    }

    #[test]
    fn test_volume_information_field_names() {
        let body = r#"{"target":"speaker","volume":20,"mute":false,"maxVolume":100,"minVolume":0}"#;
        let info: VolumeInformation = serde_json::from_str(body).unwrap();
        assert_eq!(info.target, "speaker");
        assert_eq!(info.volume, 20);
        assert_eq!(info.max_volume, 100);
    }
}
