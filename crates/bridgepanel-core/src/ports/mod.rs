//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the popup controller expects from the
//! platform. They contain no implementation details and use only domain
//! types.
//!
//! # Design Rules
//!
//! - The background process is reached only through `BackgroundPort`
//! - Surface and navigator calls are fire-and-forget: adapters handle their
//!   own failures and never report back
//! - All ports are object-safe and used as `Arc<dyn Port>`

mod background;
mod navigator;
mod surface;

pub use background::BackgroundPort;
pub use navigator::{Navigator, NoopNavigator};
pub use surface::{NoopSurface, PopupSurface, ReconnectButton, RenderedView, ViewKind};
