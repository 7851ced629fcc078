//! Popup surface port: the DOM side of the panel.

use serde::Serialize;

use crate::messages::BannerKind;

/// Which of the mutually exclusive views is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Bridge switched off.
    Disabled,
    /// Disable in progress.
    Disabling,
    /// Enable in progress.
    Enabling,
    /// Normal connection status.
    Status,
    /// Status could not be fetched.
    Error,
    /// Transient notification.
    Banner(BannerKind),
}

impl ViewKind {
    /// Short name for logs and transcripts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Disabling => "disabling",
            Self::Enabling => "enabling",
            Self::Status => "status",
            Self::Error => "error",
            Self::Banner(BannerKind::Warning) => "warning",
            Self::Banner(BannerKind::Error) => "error-banner",
            Self::Banner(BannerKind::Success) => "success",
        }
    }
}

/// A rendered view: the HTML fragment for the status container plus the
/// affordances that live outside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    pub kind: ViewKind,
    /// Fragment for the status container. Server-controlled text is escaped.
    pub html: String,
    /// Whether the reconnect button should be shown.
    pub reconnect_visible: bool,
}

/// State of the reconnect button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconnectButton {
    /// Clickable, default label.
    Idle,
    /// Disabled while a reconnect request is in flight.
    Busy,
}

impl ReconnectButton {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Reconnect",
            Self::Busy => "Connecting...",
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// The popup's DOM, as seen by the controller.
///
/// # Design
///
/// - **Object-safe**: used via `Arc<dyn PopupSurface>`
/// - **Fire-and-forget**: methods don't return `Result`
/// - **Idempotent**: showing the same view twice is harmless
pub trait PopupSurface: Send + Sync {
    /// Replace the status container with `view`.
    fn show(&self, view: &RenderedView);

    /// Set the bridge on/off switch.
    fn set_toggle(&self, enabled: bool);

    /// Update the reconnect button's label and enabled state.
    fn set_reconnect_button(&self, button: ReconnectButton);
}

/// Surface that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSurface;

impl PopupSurface for NoopSurface {
    fn show(&self, _view: &RenderedView) {}
    fn set_toggle(&self, _enabled: bool) {}
    fn set_reconnect_button(&self, _button: ReconnectButton) {}
}
