//! High-level Sony Bravia API for TV control
//!
//! This crate provides a type-safe client for the Bravia control plane. It
//! uses the private `rpc-client` crate for the JSON envelope and transport
//! composition, and exposes one service handle per device capability group.
//!
//! # Capability groups
//!
//! - `system` - power status and control
//! - `audio` - volume and mute
//! - `app_control` - listing and launching applications
//! - `av_content` - external inputs and content enumeration
//! - `ircc` - infrared remote codes over the legacy SOAP channel
//!
//! # Authentication
//!
//! ```rust,no_run
//! use bravia_api::BraviaClient;
//! use url::Url;
//!
//! # fn main() -> bravia_api::Result<()> {
//! let base = Url::parse("http://192.168.1.40/").unwrap();
//! let client = BraviaClient::new(base).with_auth_psk("sosecret");
//!
//! client.system.set_power_status(true)?;
//! # Ok(())
//! # }
//! ```
//!
//! `with_auth_psk` composes a transport decorator; the original client value
//! is left untouched and both can be used concurrently.

pub mod client;
pub mod error;
pub mod service;
pub mod services;

pub use client::BraviaClient;
pub use error::{ApiError, Result};
pub use service::ServicePath;
pub use services::{
    AppControlService, Application, AudioService, AvContentService, ContentCount, ContentInfo,
    ExternalInputStatus, IrccCommand, IrccService, PowerState, PowerStatus, Scheme, Source,
    SystemService, Volume, VolumeInformation,
};
