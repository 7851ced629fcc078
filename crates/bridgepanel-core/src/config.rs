//! Panel configuration.
//!
//! All fields are defaulted so a partial config file (or none at all) still
//! produces a working panel.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Project page opened by the external link.
pub const DEFAULT_EXTERNAL_URL: &str = "https://modelcontextprotocol.io";

/// Settings document opened by the settings links.
pub const DEFAULT_SETTINGS_PAGE: &str = "settings.html";

/// Section used when a settings link does not name one.
pub const DEFAULT_SETTINGS_SECTION: &str = "general";

/// Command shown in the "bridge not running" help text.
pub const DEFAULT_BRIDGE_COMMAND: &str = "npx mcp-bridge";

/// Panel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// URL opened by the external site link.
    pub external_url: String,
    /// Settings document, addressed relative to the extension root.
    pub settings_page: String,
    /// Example command shown when the bridge is not running.
    pub bridge_command: String,
    /// Fixed delays for follow-up work.
    pub timings: PanelTimings,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            external_url: DEFAULT_EXTERNAL_URL.to_string(),
            settings_page: DEFAULT_SETTINGS_PAGE.to_string(),
            bridge_command: DEFAULT_BRIDGE_COMMAND.to_string(),
            timings: PanelTimings::default(),
        }
    }
}

impl PanelConfig {
    /// Settings URL with the section as hash fragment (`general` by default).
    pub fn settings_url(&self, section: Option<&str>) -> String {
        let section = section
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SETTINGS_SECTION);
        format!("{}#{}", self.settings_page, section)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.external_url.starts_with("https://") || self.external_url.starts_with("http://"))
        {
            return Err(ConfigError::InvalidExternalUrl(self.external_url.clone()));
        }
        if self.settings_page.trim().is_empty() || self.settings_page.contains('#') {
            return Err(ConfigError::InvalidSettingsPage(self.settings_page.clone()));
        }
        self.timings.validate()
    }
}

/// Fixed delays, in milliseconds.
///
/// Kept configurable so adapters and tests can shorten them; the defaults are
/// what the popup uses in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelTimings {
    /// Re-fetch after a `get_servers` refresh was acknowledged.
    pub server_refresh_delay_ms: u64,
    /// Re-fetch after a toggle or a cross-window settings change.
    pub toggle_refresh_delay_ms: u64,
    /// Restore the reconnect button after a reconnect request.
    pub reconnect_restore_delay_ms: u64,
    /// Revert a success banner to the status view.
    pub success_revert_delay_ms: u64,
    /// Revert a warning banner to the status view.
    pub warning_revert_delay_ms: u64,
}

impl Default for PanelTimings {
    fn default() -> Self {
        Self {
            server_refresh_delay_ms: 500,
            toggle_refresh_delay_ms: 100,
            reconnect_restore_delay_ms: 2_000,
            success_revert_delay_ms: 5_000,
            warning_revert_delay_ms: 10_000,
        }
    }
}

impl PanelTimings {
    pub const fn server_refresh_delay(&self) -> Duration {
        Duration::from_millis(self.server_refresh_delay_ms)
    }

    pub const fn toggle_refresh_delay(&self) -> Duration {
        Duration::from_millis(self.toggle_refresh_delay_ms)
    }

    pub const fn reconnect_restore_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_restore_delay_ms)
    }

    pub const fn success_revert_delay(&self) -> Duration {
        Duration::from_millis(self.success_revert_delay_ms)
    }

    pub const fn warning_revert_delay(&self) -> Duration {
        Duration::from_millis(self.warning_revert_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let delays = [
            ("server_refresh_delay_ms", self.server_refresh_delay_ms),
            ("toggle_refresh_delay_ms", self.toggle_refresh_delay_ms),
            ("reconnect_restore_delay_ms", self.reconnect_restore_delay_ms),
            ("success_revert_delay_ms", self.success_revert_delay_ms),
            ("warning_revert_delay_ms", self.warning_revert_delay_ms),
        ];
        match delays.iter().find(|(_, ms)| *ms == 0) {
            Some((name, _)) => Err(ConfigError::ZeroDelay { name: *name }),
            None => Ok(()),
        }
    }
}
