//! Command handlers.
//!
//! Handlers are thin: decode input, drive the controller or the renderer,
//! print the result. They never hold popup logic of their own.

pub mod render;
pub mod replay;
