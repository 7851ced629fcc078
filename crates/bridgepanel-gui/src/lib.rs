//! Popup controller facade for bridgepanel adapters.
//!
//! This crate provides `PopupController`, a platform-agnostic view layer over
//! the background bridge manager. Adapters (a browser extension shell, the
//! CLI harness) own the platform APIs and forward events to it.
//!
//! # Architecture
//!
//! ```text
//! Adapters:     extension shell     bridgepanel-cli
//!                    ↓                    ↓
//! Facade:            └── bridgepanel-gui ─┘
//!                       PopupController
//!                            ↓
//! Core:               bridgepanel-core
//! ```
//!
//! # Rules
//!
//! 1. **No platform dependencies** - messaging, DOM and tabs come in as ports
//! 2. **Pure rendering** - `render` maps data to views with no side effects
//! 3. **Explicit timers** - every delayed follow-up goes through `Scheduler`

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by integration tests
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio_test as _;

mod actions;
mod controller;
mod deps;
mod navigation;
mod push;
pub mod render;
pub mod scheduler;
mod state;
mod status;

// Primary exports
pub use controller::PopupController;
pub use deps::PanelDeps;
pub use scheduler::{ScheduledTask, Scheduler};
