//! Message contracts exchanged with the background process and the UI shell.
//!
//! # Wire Format
//!
//! Requests and push events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "toggle_bridge_enabled", "enabled": false }
//! { "type": "bridge_status_update", "isConnected": true, "serverCount": 2 }
//! ```
//!
//! Replies are untagged objects; `get_status` replies carry a `status` field
//! next to the snapshot keys, action replies a `success` flag.

mod push;
mod settings;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::StatusSnapshot;
use crate::error::PanelError;

pub use push::{BannerKind, NotificationPayload, PushEvent};
pub use settings::{PersistedSettings, SettingsChange};

/// Requests the popup sends to the background process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundRequest {
    /// Fetch the full status snapshot.
    GetStatus,
    /// Ask the background to refresh its server list. Acknowledgement only.
    GetServers,
    /// Switch the bridge on or off.
    ToggleBridgeEnabled { enabled: bool },
    /// Ask the background to (re)connect the bridge now.
    ConnectBridge,
}

impl BackgroundRequest {
    /// Wire tag of the request, for logging and scripted replies.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetStatus => "get_status",
            Self::GetServers => "get_servers",
            Self::ToggleBridgeEnabled { .. } => "toggle_bridge_enabled",
            Self::ConnectBridge => "connect_bridge",
        }
    }
}

/// Decode a `get_status` reply.
///
/// - `status == "ok"`: the same object decodes into a [`StatusSnapshot`]
/// - any other `status`: [`PanelError::Rejected`] with the server's `error`
/// - no `status`, or an undecodable snapshot: [`PanelError::Malformed`]
pub fn parse_status_reply(reply: Value) -> Result<StatusSnapshot, PanelError> {
    match reply.get("status").and_then(Value::as_str) {
        Some("ok") => serde_json::from_value(reply)
            .map_err(|e| PanelError::Malformed(format!("invalid status snapshot: {e}"))),
        Some(_) => Err(PanelError::Rejected(
            reply
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_owned),
        )),
        None => Err(PanelError::Malformed(
            "status reply has no status field".to_string(),
        )),
    }
}

/// Reply to `toggle_bridge_enabled` and `connect_bridge`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionReply {
    /// Decode an action reply from the raw background response.
    pub fn from_value(reply: Value) -> Result<Self, PanelError> {
        serde_json::from_value(reply)
            .map_err(|e| PanelError::Malformed(format!("invalid action reply: {e}")))
    }

    /// Turn `success == false` into [`PanelError::ActionFailed`].
    pub fn into_result(self) -> Result<(), PanelError> {
        if self.success {
            Ok(())
        } else {
            Err(PanelError::ActionFailed(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// User actions raised by the popup's controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    /// The bridge on/off switch was flipped.
    ToggleBridge,
    /// The reconnect button was pressed.
    Reconnect,
    /// The project link was clicked.
    OpenExternalSite,
    /// A settings link was clicked, optionally deep-linking a section.
    OpenSettings {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        section: Option<String>,
    },
}
