use std::sync::Arc;

use crate::client::ClientCore;
use crate::error::{ApiError, Result};
use crate::service::ServicePath;

/// SOAPACTION header value fixed by the IRCC protocol
const SOAP_ACTION: &str = "\"urn:schemas-sony-com:service:IRCC:1#X_SendIRCC\"";

/// Predefined IRCC remote control commands
///
/// Each command maps to the base64 code the infrared protocol expects.
/// Custom codes can be sent directly with [`IrccService::send_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IrccCommand {
    Home,
    Return,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Num0,
    Dot,
    VolumeUp,
    VolumeDown,
    Mute,
    TvPower,
    Epg,
    Confirm,
    ChannelUp,
    ChannelDown,
    Up,
    Down,
    Left,
    Right,
    Display,
    SubTitle,
    Audio,
    Jump,
    Exit,
    Tv,
    Input,
    Red,
    Green,
    Yellow,
    Blue,
    Teletext,
    Stop,
    Rewind,
    Forward,
    Prev,
    Next,
    Play,
    Rec,
    Pause,
    OneTouchView,
    GooglePlay,
    Netflix,
    YouTube,
    ActionMenu,
    ApplicationLauncher,
    Help,
    WakeUp,
    PowerOff,
    Sleep,
    Hdmi1,
    Hdmi2,
    Hdmi3,
    DemoMode,
}

impl IrccCommand {
    /// The base64 command code sent over the wire
    pub fn code(&self) -> &'static str {
        match self {
            IrccCommand::Home => "AAAAAQAAAAEAAABgAw==",
            IrccCommand::Return => "AAAAAgAAAJcAAAAjAw==",
            IrccCommand::Num1 => "AAAAAQAAAAEAAAAAAw==",
            IrccCommand::Num2 => "AAAAAQAAAAEAAAABAw==",
            IrccCommand::Num3 => "AAAAAQAAAAEAAAACAw==",
            IrccCommand::Num4 => "AAAAAQAAAAEAAAADAw==",
            IrccCommand::Num5 => "AAAAAQAAAAEAAAAEAw==",
            IrccCommand::Num6 => "AAAAAQAAAAEAAAAFAw==",
            IrccCommand::Num7 => "AAAAAQAAAAEAAAAGAw==",
            IrccCommand::Num8 => "AAAAAQAAAAEAAAAHAw==",
            IrccCommand::Num9 => "AAAAAQAAAAEAAAAIAw==",
            IrccCommand::Num0 => "AAAAAQAAAAEAAAAJAw==",
            IrccCommand::Dot => "AAAAAgAAAJcAAAAdAw==",
            IrccCommand::VolumeUp => "AAAAAQAAAAEAAAASAw==",
            IrccCommand::VolumeDown => "AAAAAQAAAAEAAAATAw==",
            IrccCommand::Mute => "AAAAAQAAAAEAAAAUAw==",
            IrccCommand::TvPower => "AAAAAQAAAAEAAAAVAw==",
            IrccCommand::Epg => "AAAAAgAAAKQAAABbAw==",
            IrccCommand::Confirm => "AAAAAQAAAAEAAABlAw==",
            IrccCommand::ChannelUp => "AAAAAQAAAAEAAAAQAw==",
            IrccCommand::ChannelDown => "AAAAAQAAAAEAAAARAw==",
            IrccCommand::Up => "AAAAAQAAAAEAAAB0Aw==",
            IrccCommand::Down => "AAAAAQAAAAEAAAB1Aw==",
            IrccCommand::Left => "AAAAAQAAAAEAAAA0Aw==",
            IrccCommand::Right => "AAAAAQAAAAEAAAAzAw==",
            IrccCommand::Display => "AAAAAQAAAAEAAAA6Aw==",
            IrccCommand::SubTitle => "AAAAAgAAAJcAAAAoAw==",
            IrccCommand::Audio => "AAAAAQAAAAEAAAAXAw==",
            IrccCommand::Jump => "AAAAAQAAAAEAAAA7Aw==",
            IrccCommand::Exit => "AAAAAQAAAAEAAABjAw==",
            IrccCommand::Tv => "AAAAAQAAAAEAAAAkAw==",
            IrccCommand::Input => "AAAAAQAAAAEAAAAlAw==",
            IrccCommand::Red => "AAAAAgAAAJcAAAAlAw==",
            IrccCommand::Green => "AAAAAgAAAJcAAAAmAw==",
            IrccCommand::Yellow => "AAAAAgAAAJcAAAAnAw==",
            IrccCommand::Blue => "AAAAAgAAAJcAAAAkAw==",
            IrccCommand::Teletext => "AAAAAQAAAAEAAAA/Aw==",
            IrccCommand::Stop => "AAAAAgAAAJcAAAAYAw==",
            IrccCommand::Rewind => "AAAAAgAAAJcAAAAbAw==",
            IrccCommand::Forward => "AAAAAgAAAJcAAAAcAw==",
            IrccCommand::Prev => "AAAAAgAAAJcAAAA8Aw==",
            IrccCommand::Next => "AAAAAgAAAJcAAAA9Aw==",
            IrccCommand::Play => "AAAAAgAAAJcAAAAaAw==",
            IrccCommand::Rec => "AAAAAgAAAJcAAAAgAw==",
            IrccCommand::Pause => "AAAAAgAAAJcAAAAZAw==",
            IrccCommand::OneTouchView => "AAAAAgAAABoAAABlAw==",
            IrccCommand::GooglePlay => "AAAAAgAAAMQAAABGAw==",
            IrccCommand::Netflix => "AAAAAgAAABoAAAB8Aw==",
            IrccCommand::YouTube => "AAAAAgAAAMQAAABHAw==",
            IrccCommand::ActionMenu => "AAAAAgAAAMQAAABLAw==",
            IrccCommand::ApplicationLauncher => "AAAAAgAAAMQAAAAqAw==",
            IrccCommand::Help => "AAAAAgAAAMQAAABNAw==",
            IrccCommand::WakeUp => "AAAAAQAAAAEAAAAuAw==",
            IrccCommand::PowerOff => "AAAAAQAAAAEAAAAvAw==",
            IrccCommand::Sleep => "AAAAAQAAAAEAAAAvAw==",
            IrccCommand::Hdmi1 => "AAAAAgAAABoAAABaAw==",
            IrccCommand::Hdmi2 => "AAAAAgAAABoAAABbAw==",
            IrccCommand::Hdmi3 => "AAAAAgAAABoAAABcAw==",
            IrccCommand::DemoMode => "AAAAAgAAAJcAAAB8Aw==",
        }
    }
}

/// Handles IRCC (infrared compatible control) commands
///
/// This is the one capability group that bypasses the JSON envelope: it
/// posts a SOAP XML body with a fixed SOAPACTION header and the device
/// answers with an HTTP status code only.
pub struct IrccService {
    core: Arc<ClientCore>,
}

impl IrccService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Send a predefined remote control command
    pub fn send(&self, command: IrccCommand) -> Result<()> {
        self.send_code(command.code())
    }

    /// Send a pre-encoded IRCC command code
    ///
    /// Any non-2xx status is a failure; there is no structured error body
    /// on this channel.
    pub fn send_code(&self, code: &str) -> Result<()> {
        let body = build_ircc_xml(code);
        let response = self
            .core
            .post_soap(ServicePath::Ircc, SOAP_ACTION, body.into_bytes())?;
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        Ok(())
    }
}

/// Build the SOAP XML body for an IRCC command
fn build_ircc_xml(code: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">
    <s:Body>
        <u:X_SendIRCC xmlns:u="urn:schemas-sony-com:service:IRCC:1">
            <IRCCCode>{code}</IRCCCode>
        </u:X_SendIRCC>
    </s:Body>
</s:Envelope>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ircc_xml_embeds_code() {
        let body = build_ircc_xml(IrccCommand::Mute.code());
        assert!(body.contains("<IRCCCode>AAAAAQAAAAEAAAAUAw==</IRCCCode>"));
        assert!(body.contains("urn:schemas-sony-com:service:IRCC:1"));
    }

    #[test]
    fn test_power_aliases_share_a_code() {
        assert_eq!(IrccCommand::PowerOff.code(), IrccCommand::Sleep.code());
    }
}
