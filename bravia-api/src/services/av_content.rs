use std::sync::Arc;

use rpc_client::Empty;
use serde::{Deserialize, Serialize};

use crate::client::ClientCore;
use crate::error::Result;
use crate::service::ServicePath;

/// An external input and its live connection status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalInputStatus {
    pub uri: String,
    pub title: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub icon: String,
    /// Whether a source is currently connected to this input
    #[serde(default)]
    pub status: bool,
}

/// A URI scheme understood by the device (`extInput`, `tv`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub scheme: String,
}

/// A content source within a scheme (`extInput:hdmi`, `tv:dvbt`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub source: String,
}

/// Number of content entries available under a source
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentCount {
    pub count: u32,
}

/// One entry of a content listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    pub uri: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub index: i32,
}

/// Handles requests related to AV content, such as inputs and playback
pub struct AvContentService {
    core: Arc<ClientCore>,
}

impl AvContentService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// List the external inputs and their connection status, in device order
    pub fn get_current_external_inputs_status(&self) -> Result<Vec<ExternalInputStatus>> {
        let (inputs,): (Vec<ExternalInputStatus>,) = self.core.call(
            ServicePath::AvContent,
            "getCurrentExternalInputsStatus",
            "1.0",
            Empty::default(),
        )?;
        Ok(inputs)
    }

    /// Switch the active input or content by URI
    pub fn set_play_content(&self, uri: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Params {
            uri: String,
        }

        let _: Empty = self.core.call(
            ServicePath::AvContent,
            "setPlayContent",
            "1.0",
            (Params {
                uri: uri.to_string(),
            },),
        )?;
        Ok(())
    }

    /// List the URI schemes the device understands
    pub fn get_scheme_list(&self) -> Result<Vec<Scheme>> {
        let (schemes,): (Vec<Scheme>,) = self.core.call(
            ServicePath::AvContent,
            "getSchemeList",
            "1.0",
            Empty::default(),
        )?;
        Ok(schemes)
    }

    /// List the content sources available under a scheme
    pub fn get_source_list(&self, scheme: &str) -> Result<Vec<Source>> {
        #[derive(Serialize)]
        struct Params {
            scheme: String,
        }

        let (sources,): (Vec<Source>,) = self.core.call(
            ServicePath::AvContent,
            "getSourceList",
            "1.0",
            (Params {
                scheme: scheme.to_string(),
            },),
        )?;
        Ok(sources)
    }

    /// Count the content entries available under a source
    pub fn get_content_count(&self, source: &str) -> Result<u32> {
        #[derive(Serialize)]
        struct Params {
            source: String,
        }

        let (count,): (ContentCount,) = self.core.call(
            ServicePath::AvContent,
            "getContentCount",
            "1.1",
            (Params {
                source: source.to_string(),
            },),
        )?;
        Ok(count.count)
    }

    /// List a window of content entries under a source
    ///
    /// `start` is the zero-based index of the first entry and `count` the
    /// maximum number of entries to return.
    pub fn get_content_list(&self, source: &str, start: u32, count: u32) -> Result<Vec<ContentInfo>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            source: String,
            st_idx: u32,
            cnt: u32,
        }

        let (contents,): (Vec<ContentInfo>,) = self.core.call(
            ServicePath::AvContent,
            "getContentList",
            "1.2",
            (Params {
                source: source.to_string(),
                st_idx: start,
                cnt: count,
            },),
        )?;
        Ok(contents)
    }
}
