//! Disable lifecycle progress.

use serde::{Deserialize, Serialize};

/// Stage of an in-flight disable operation.
///
/// Unknown stage strings decode to [`DisableStage::Unknown`] rather than
/// failing the whole event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisableStage {
    /// Checking for operations that block the disable.
    #[default]
    Checking,
    /// Waiting for pending operations to drain.
    Waiting,
    /// Tearing down bridge connections.
    Cleanup,
    /// Disable finished, final bookkeeping.
    Complete,
    #[serde(other)]
    Unknown,
}

impl DisableStage {
    /// Human-readable stage text shown in the progress view.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking for active operations...",
            Self::Waiting => "Waiting for operations to complete...",
            Self::Cleanup => "Cleaning up connections...",
            Self::Complete => "Finalizing...",
            Self::Unknown => "Disabling...",
        }
    }
}

/// Progress record attached to disable events and to the status snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressInfo {
    /// Current stage.
    pub stage: DisableStage,
    /// Free-form message from the background process.
    pub message: String,
    /// Names of operations still pending.
    pub operations: Vec<String>,
}

impl ProgressInfo {
    /// Create a progress record at the given stage.
    pub fn at_stage(stage: DisableStage) -> Self {
        Self {
            stage,
            ..Self::default()
        }
    }
}
