//! Derived values for the normal status view.

use bridgepanel_core::StatusSnapshot;

/// Connection state as shown by the status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionState {
    /// Connecting wins over connected: a reconnect in progress is shown as such.
    pub const fn of(snapshot: &StatusSnapshot) -> Self {
        if snapshot.bridge_connecting {
            Self::Connecting
        } else if snapshot.bridge_connected {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Connecting => "Connecting...",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }

    /// CSS colour class of the status dot.
    pub const fn dot_class(self) -> &'static str {
        match self {
            Self::Connecting => "grey",
            Self::Connected => "green",
            Self::Disconnected => "red",
        }
    }
}

/// Help text shown under a disconnected bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpText {
    /// The background stopped retrying.
    MaxAttemptsReached,
    /// The bridge is probably not running.
    StartBridge,
}

/// Everything the normal status view displays, computed from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    pub connection: ConnectionState,
    pub extension_label: &'static str,
    pub server_count: usize,
    pub tool_count: u64,
    /// Per-server breakdown is shown.
    pub show_breakdown: bool,
    pub help: Option<HelpText>,
    pub reconnect_visible: bool,
}

impl StatusSummary {
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        let connected = snapshot.bridge_connected;
        let connecting = snapshot.bridge_connecting;
        let server_count = snapshot.server_count();

        let help = if connected || connecting {
            None
        } else if snapshot.max_reconnect_attempts_reached {
            Some(HelpText::MaxAttemptsReached)
        } else {
            Some(HelpText::StartBridge)
        };

        Self {
            connection: ConnectionState::of(snapshot),
            extension_label: if snapshot.is_enabling {
                "Enabling..."
            } else {
                "Active"
            },
            server_count,
            tool_count: snapshot.tool_count(),
            show_breakdown: connected && server_count > 0,
            help,
            reconnect_visible: reconnect_visible(snapshot),
        }
    }
}

/// The reconnect button is offered only when the background will not
/// reconnect on its own.
pub fn reconnect_visible(snapshot: &StatusSnapshot) -> bool {
    !snapshot.bridge_connected
        && !snapshot.bridge_connecting
        && (snapshot.max_reconnect_attempts_reached || !snapshot.settings.auto_connect)
}
