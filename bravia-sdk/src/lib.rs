//! # Bravia SDK - name resolution and state streaming for TV control
//!
//! Builds on [`bravia_api`] with the two pieces of behavior that sit above
//! raw device calls:
//!
//! - **Name resolution** - refer to apps and inputs by approximate name
//!   instead of device URIs.
//! - **State streaming** - bridge the poll-only device into an ordered
//!   stream of state snapshots per subscriber.
//!
//! ```rust,no_run
//! use bravia_sdk::{find_app, StatePoller, StateEvent};
//! use bravia_api::BraviaClient;
//! use std::sync::Arc;
//! use url::Url;
//!
//! # fn main() -> bravia_sdk::Result<()> {
//! let base = Url::parse("http://192.168.1.40/").unwrap();
//! let client = Arc::new(BraviaClient::new(base).with_auth_psk("sosecret"));
//!
//! // Launch an app by rough name.
//! let app = find_app(&client, "netfl")?;
//! client.app_control.set_active_app(&app.uri, None)?;
//!
//! // Stream state until the subscriber hangs up.
//! for event in StatePoller::new(Arc::clone(&client)).subscribe() {
//!     if let StateEvent::Snapshot(snapshot) = event {
//!         println!("volume is {}", snapshot.volume);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bravia-sdk (resolution, state streaming)
//!     ↓
//! bravia-api (capability-group operations)
//!     ↓
//! rpc-client (envelope codec, transport chain)
//! ```

pub use error::{Result, SdkError};
pub use resolve::{find_app, find_input_by_label, find_input_by_name, resolve, ResolveError};
pub use stream::{
    StateEvent, StatePoller, StateSnapshot, StateSource, StateStream, DEFAULT_POLL_INTERVAL,
};

// Re-export the API crate types callers handle directly
pub use bravia_api::{Application, BraviaClient, ExternalInputStatus, PowerState};

mod error;
mod resolve;
mod stream;
