//! Render command handler.

use std::path::Path;

use bridgepanel_core::{PanelConfig, RenderedView, StatusSnapshot, parse_status_reply};
use bridgepanel_gui::render::render_snapshot;
use serde_json::Value;
use tracing::debug;

use crate::adapters::TranscriptEntry;
use crate::error::CliError;

/// Execute the render command: print the view for the snapshot in `path`.
pub fn execute(config: &PanelConfig, path: &Path) -> Result<(), CliError> {
    let view = render_file(config, path)?;
    println!("{}", TranscriptEntry::View(view));
    Ok(())
}

/// Render a snapshot file.
///
/// Accepts either a bare snapshot or a whole `get_status` reply; a reply
/// that reports an error is an input error.
pub fn render_file(config: &PanelConfig, path: &Path) -> Result<RenderedView, CliError> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    let snapshot: StatusSnapshot = if value.get("status").is_some() {
        parse_status_reply(value).map_err(|e| CliError::Input(e.to_string()))?
    } else {
        serde_json::from_value(value)?
    };
    debug!(
        enabled = snapshot.bridge_enabled,
        servers = snapshot.server_count(),
        "Rendering snapshot file"
    );
    Ok(render_snapshot(&snapshot, config))
}
