//! Capability-group services built on the shared JSON envelope
//!
//! Every operation follows the same template: build a method call with the
//! capability's fixed method name, submit it through the envelope codec over
//! the composed transport, and return the typed payload. The IRCC service is
//! the deliberate exception; it speaks the legacy SOAP protocol.

mod app_control;
mod audio;
mod av_content;
mod ircc;
mod system;

pub use app_control::{AppControlService, Application};
pub use audio::{AudioService, Volume, VolumeInformation};
pub use av_content::{
    AvContentService, ContentCount, ContentInfo, ExternalInputStatus, Scheme, Source,
};
pub use ircc::{IrccCommand, IrccService};
pub use system::{PowerState, PowerStatus, SystemService};
