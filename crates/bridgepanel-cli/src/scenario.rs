//! Replay scenario files.
//!
//! ```json
//! {
//!   "timings": { "warning_revert_delay_ms": 50 },
//!   "replies": {
//!     "get_status": [{ "status": "ok", "bridgeEnabled": true }],
//!     "connect_bridge": [{ "success": false, "error": "busy" }, null]
//!   },
//!   "steps": [
//!     { "step": "initialize" },
//!     { "step": "push", "type": "server_data_updated" },
//!     { "step": "action", "action": "reconnect" },
//!     { "step": "wait", "ms": 2000 }
//!   ]
//! }
//! ```
//!
//! Replies are consumed in order per request type; the last one repeats.
//! A `null` reply means nobody answered.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use bridgepanel_core::{PanelConfig, PanelTimings, PushEvent, SettingsChange, UiAction};
use serde::Deserialize;
use serde_json::Value;

use crate::error::CliError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Delay overrides; unset fields keep their defaults.
    pub timings: Option<PanelTimings>,
    /// Scripted replies keyed by request type.
    pub replies: HashMap<String, Vec<Value>>,
    pub steps: Vec<Step>,
}

/// One thing that happens to the popup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// The popup opened.
    Initialize,
    /// A push message from the background.
    Push(PushEvent),
    /// Persisted settings changed in another window.
    SettingsChange(SettingsChange),
    /// The popup was hidden or shown.
    Visibility { visible: bool },
    /// The user used one of the controls.
    Action(UiAction),
    /// Let scheduled follow-ups run.
    Wait { ms: u64 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialize => write!(f, "initialize"),
            Self::Push(event) => write!(f, "push {}", event.event_name()),
            Self::SettingsChange(_) => write!(f, "settings change"),
            Self::Visibility { visible: true } => write!(f, "show popup"),
            Self::Visibility { visible: false } => write!(f, "hide popup"),
            Self::Action(action) => write!(f, "action {action:?}"),
            Self::Wait { ms } => write!(f, "wait {ms}ms"),
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// `base` with this scenario's delay overrides applied, validated.
    pub fn config(&self, base: &PanelConfig) -> Result<PanelConfig, CliError> {
        let mut config = base.clone();
        if let Some(timings) = self.timings {
            config.timings = timings;
        }
        config.validate()?;
        Ok(config)
    }
}
