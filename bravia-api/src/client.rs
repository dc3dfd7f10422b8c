use std::sync::Arc;

use rpc_client::{AuthPsk, RpcClient, Transport, WireResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::Result;
use crate::service::ServicePath;
use crate::services::{
    AppControlService, AudioService, AvContentService, IrccService, SystemService,
};

/// Immutable client configuration shared by every capability-group handle
///
/// One `ClientCore` binds a base address to a transport chain. It is never
/// mutated after construction; reconfiguration builds a fresh core.
pub(crate) struct ClientCore {
    base_url: Url,
    rpc: RpcClient,
}

impl ClientCore {
    fn endpoint(&self, service: ServicePath) -> Result<String> {
        Ok(self.base_url.join(service.path())?.to_string())
    }

    /// Execute one JSON envelope call against a capability-group endpoint
    pub(crate) fn call<P, T>(
        &self,
        service: ServicePath,
        method: &str,
        version: &str,
        params: P,
    ) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoint(service)?;
        Ok(self.rpc.call(&url, method, version, params)?)
    }

    /// Deliver a raw SOAP post to a capability-group endpoint
    pub(crate) fn post_soap(
        &self,
        service: ServicePath,
        soap_action: &str,
        body: Vec<u8>,
    ) -> Result<WireResponse> {
        let url = self.endpoint(service)?;
        Ok(self.rpc.post_soap(&url, soap_action, body)?)
    }
}

/// A client for interacting with a Bravia device's control plane
///
/// Capability groups are exposed as public service handles, all bound to the
/// same immutable configuration:
///
/// ```rust,no_run
/// use bravia_api::BraviaClient;
/// use url::Url;
///
/// # fn main() -> bravia_api::Result<()> {
/// let base = Url::parse("http://192.168.1.40/").unwrap();
/// let client = BraviaClient::new(base).with_auth_psk("sosecret");
///
/// let status = client.system.get_power_status()?;
/// println!("TV is {:?}", status.status);
/// # Ok(())
/// # }
/// ```
///
/// # Reconfiguration
///
/// [`BraviaClient::with_auth_psk`] does not mutate the receiver. It returns a
/// new client whose transport chain carries one more decorator and whose
/// service handles are all freshly bound to that chain; clients created
/// earlier keep their original behavior.
pub struct BraviaClient {
    core: Arc<ClientCore>,

    /// Power status and control
    pub system: SystemService,
    /// Volume and mute control
    pub audio: AudioService,
    /// Listing and launching applications
    pub app_control: AppControlService,
    /// External inputs and content enumeration
    pub av_content: AvContentService,
    /// Infrared remote command codes over the legacy SOAP channel
    pub ircc: IrccService,
}

impl BraviaClient {
    /// Create a client for the device at the given base address
    pub fn new(base_url: Url) -> Self {
        Self::with_transport(base_url, Arc::new(rpc_client::HttpTransport::new()))
    }

    /// Create a client over a caller-supplied transport chain
    pub fn with_transport(base_url: Url, transport: Arc<dyn Transport>) -> Self {
        Self::bind(Arc::new(ClientCore {
            base_url,
            rpc: RpcClient::with_transport(transport),
        }))
    }

    /// Return a new client that authenticates with the given pre-shared key
    ///
    /// The PSK header is injected at the transport layer, so it covers every
    /// outgoing request, including the legacy IRCC channel.
    pub fn with_auth_psk(&self, psk: &str) -> Self {
        let transport = AuthPsk::wrap(self.core.rpc.transport(), psk);
        Self::with_transport(self.core.base_url.clone(), transport)
    }

    /// The base address this client is bound to
    pub fn base_url(&self) -> &Url {
        &self.core.base_url
    }

    // Every service handle is rebound here; a handle must never outlive the
    // configuration it was created from.
    fn bind(core: Arc<ClientCore>) -> Self {
        Self {
            system: SystemService::new(Arc::clone(&core)),
            audio: AudioService::new(Arc::clone(&core)),
            app_control: AppControlService::new(Arc::clone(&core)),
            av_content: AvContentService::new(Arc::clone(&core)),
            ircc: IrccService::new(Arc::clone(&core)),
            core,
        }
    }
}

impl std::fmt::Debug for BraviaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraviaClient")
            .field("base_url", &self.core.base_url.as_str())
            .finish()
    }
}
