//! Domain types reported by the background bridge manager.
//!
//! These are pure data types with no infrastructure dependencies. Field names
//! follow the wire format of the background process, which mixes camelCase and
//! snake_case keys, so every field carries an explicit serde name.

mod progress;
mod status;

pub use progress::{DisableStage, ProgressInfo};
pub use status::{BridgeSettings, ConnectionDelta, ServerInfo, StatusSnapshot};
