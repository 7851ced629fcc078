//! Core domain types and port definitions for bridgepanel.
//!
//! This crate owns everything the popup controller exchanges with the outside
//! world: the status snapshot pushed by the background bridge manager, the
//! typed message union for requests and push events, and the port traits the
//! adapters implement (background messaging, popup surface, tab navigation).
//!
//! # Structure
//!
//! - `domain` - Status snapshot, MCP server summaries, disable progress
//! - `messages` - Outbound requests, replies, inbound push events, UI actions
//! - `ports` - Trait abstractions for the background process and the UI shell
//! - `config` - Panel configuration and fixed follow-up delays
//! - `error` - Transport, panel and configuration errors

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod ports;

// Re-export commonly used types for convenience
pub use config::{
    DEFAULT_BRIDGE_COMMAND, DEFAULT_EXTERNAL_URL, DEFAULT_SETTINGS_PAGE, DEFAULT_SETTINGS_SECTION,
    PanelConfig, PanelTimings,
};
pub use domain::{
    BridgeSettings, ConnectionDelta, DisableStage, ProgressInfo, ServerInfo, StatusSnapshot,
};
pub use error::{ConfigError, PanelError, TransportError};
pub use messages::{
    ActionReply, BackgroundRequest, BannerKind, NotificationPayload, PersistedSettings, PushEvent,
    SettingsChange, UiAction, parse_status_reply,
};
pub use ports::{
    BackgroundPort, Navigator, NoopNavigator, NoopSurface, PopupSurface, ReconnectButton,
    RenderedView, ViewKind,
};
