//! Error types for panel operations.
//!
//! None of these are fatal to the popup: the controller turns every failure
//! into an error view, a rolled-back control, or a log line.

use thiserror::Error;

/// Failure to exchange a message with the background process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Nobody is listening on the other end (background not running).
    #[error("no responder for {0}")]
    NoResponder(&'static str),

    /// The messaging channel was closed mid-request.
    #[error("message channel closed")]
    ChannelClosed,

    /// Any other platform messaging failure.
    #[error("messaging failed: {0}")]
    Other(String),
}

/// Errors surfaced by controller operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// The request never got a reply.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The background answered `get_status` with a non-ok status.
    #[error("status request rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    /// The reply could not be decoded.
    #[error("malformed reply: {0}")]
    Malformed(String),

    /// A user action was answered with `success: false`.
    #[error("action failed: {0}")]
    ActionFailed(String),
}

impl PanelError {
    /// Message suitable for the error view.
    ///
    /// Server-supplied reasons are shown verbatim; everything else collapses
    /// to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(Some(reason)) | Self::ActionFailed(reason) => reason.clone(),
            Self::Rejected(None) => "Failed to get status".to_string(),
            Self::Malformed(_) => "Invalid response from background service".to_string(),
            Self::Transport(_) => "Failed to communicate with background service".to_string(),
        }
    }
}

/// Invalid panel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("external URL must be an http(s) URL, got {0:?}")]
    InvalidExternalUrl(String),

    #[error("settings page must be a non-empty path without a fragment, got {0:?}")]
    InvalidSettingsPage(String),

    #[error("delay {name} must be greater than zero")]
    ZeroDelay { name: &'static str },
}
