use std::sync::Arc;

use rpc_client::Empty;
use serde::{Deserialize, Serialize};

use crate::client::ClientCore;
use crate::error::Result;
use crate::service::ServicePath;

/// An installed application as reported by the device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub title: String,
    pub uri: String,
    #[serde(default)]
    pub icon: String,
}

/// Handles requests related to listing and opening apps
pub struct AppControlService {
    core: Arc<ClientCore>,
}

impl AppControlService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// List the applications installed on the TV, in device order
    pub fn get_application_list(&self) -> Result<Vec<Application>> {
        let (apps,): (Vec<Application>,) = self.core.call(
            ServicePath::AppControl,
            "getApplicationList",
            "1.0",
            Empty::default(),
        )?;
        Ok(apps)
    }

    /// Launch an app by URI, optionally passing a data payload to it
    pub fn set_active_app(&self, uri: &str, data: Option<&str>) -> Result<()> {
        #[derive(Serialize)]
        struct Params {
            uri: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            data: Option<String>,
        }

        let _: Empty = self.core.call(
            ServicePath::AppControl,
            "setActiveApp",
            "1.0",
            (Params {
                uri: uri.to_string(),
                data: data.map(str::to_string),
            },),
        )?;
        Ok(())
    }
}
