//! Status snapshot and its parts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ProgressInfo;

fn default_true() -> bool {
    true
}

/// Authoritative status record reported by the background process.
///
/// Replaced wholesale on every full `get_status` fetch and patched in place by
/// connection deltas and disable events. Missing keys fall back to
/// [`StatusSnapshot::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    /// Whether the user has the bridge switched on.
    #[serde(rename = "bridgeEnabled")]
    pub bridge_enabled: bool,

    /// A disable operation is in flight.
    #[serde(rename = "isDisabling")]
    pub is_disabling: bool,

    /// An enable operation is in flight.
    #[serde(rename = "isEnabling")]
    pub is_enabling: bool,

    /// Progress of the in-flight disable, if any.
    #[serde(rename = "disableProgress", skip_serializing_if = "Option::is_none")]
    pub disable_progress: Option<ProgressInfo>,

    pub bridge_connected: bool,
    pub bridge_connecting: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_url: Option<String>,

    /// The background process gave up reconnecting on its own.
    #[serde(rename = "maxReconnectAttemptsReached")]
    pub max_reconnect_attempts_reached: bool,

    /// Upstream MCP servers, in the order the background reports them.
    pub mcp_servers: Vec<ServerInfo>,

    pub settings: BridgeSettings,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            bridge_enabled: true,
            is_disabling: false,
            is_enabling: false,
            disable_progress: None,
            bridge_connected: false,
            bridge_connecting: false,
            bridge_url: None,
            max_reconnect_attempts_reached: false,
            mcp_servers: Vec::new(),
            settings: BridgeSettings::default(),
        }
    }
}

impl StatusSnapshot {
    /// Number of upstream servers.
    pub fn server_count(&self) -> usize {
        self.mcp_servers.len()
    }

    /// Total number of tools across all servers.
    pub fn tool_count(&self) -> u64 {
        self.mcp_servers.iter().map(ServerInfo::tool_count).sum()
    }

    /// Merge a connection delta, keeping the current server list.
    pub fn apply_connection_delta(&mut self, delta: &ConnectionDelta) {
        self.bridge_connected = delta.is_connected;
        self.bridge_connecting = delta.is_connecting;
        self.bridge_url.clone_from(&delta.bridge_url);
        self.max_reconnect_attempts_reached = delta.max_reconnect_attempts_reached;
    }

    /// Record a finished disable without waiting for the next fetch.
    pub fn mark_disabled(&mut self) {
        self.bridge_enabled = false;
        self.is_disabling = false;
    }
}

/// Settings block embedded in the status snapshot.
///
/// Only `autoConnect` is interpreted here; every other key is carried through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeSettings {
    /// The background reconnects on its own when the bridge drops.
    #[serde(rename = "autoConnect", default = "default_true")]
    pub auto_connect: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            auto_connect: true,
            extra: Map::new(),
        }
    }
}

/// Summary of one upstream MCP server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Tool descriptors, when the background sends the full list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Value>>,

    /// Tool count, when the background only sends a number.
    #[serde(
        rename = "toolCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub declared_tool_count: Option<u64>,
}

impl ServerInfo {
    /// Create a server summary with a name and a bare tool count.
    pub fn named(name: impl Into<String>, tool_count: u64) -> Self {
        Self {
            name: Some(name.into()),
            declared_tool_count: Some(tool_count),
            ..Self::default()
        }
    }

    /// Name shown in the breakdown: `name`, then `id`, then a placeholder.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("Unknown")
    }

    /// Tool list length when present, otherwise the declared count.
    pub fn tool_count(&self) -> u64 {
        match &self.tools {
            Some(tools) => tools.len() as u64,
            None => self.declared_tool_count.unwrap_or(0),
        }
    }
}

/// Connection fields carried by a `bridge_status_update` push event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionDelta {
    pub is_connected: bool,
    pub is_connecting: bool,
    pub bridge_url: Option<String>,
    pub max_reconnect_attempts_reached: bool,
    /// Server count as the background currently sees it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_count: Option<usize>,
}

impl ConnectionDelta {
    /// True when the delta reports a server count different from `snapshot`.
    ///
    /// The cached server list is stale in that case and a shallow merge would
    /// keep showing it.
    pub fn invalidates_servers(&self, snapshot: &StatusSnapshot) -> bool {
        self.server_count
            .is_some_and(|count| count != snapshot.server_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_decodes_to_defaults() {
        let snapshot: StatusSnapshot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(snapshot, StatusSnapshot::default());
        assert!(snapshot.bridge_enabled);
        assert!(snapshot.settings.auto_connect);
    }

    #[test]
    fn decodes_wire_field_names() {
        let snapshot: StatusSnapshot = serde_json::from_value(json!({
            "status": "ok",
            "bridgeEnabled": false,
            "isDisabling": true,
            "bridge_connected": true,
            "bridge_url": "ws://localhost:54319",
            "maxReconnectAttemptsReached": true,
            "mcp_servers": [{"name": "fs", "toolCount": 4}],
            "settings": {"autoConnect": false, "theme": "dark"}
        }))
        .unwrap();

        assert!(!snapshot.bridge_enabled);
        assert!(snapshot.is_disabling);
        assert!(snapshot.bridge_connected);
        assert_eq!(snapshot.bridge_url.as_deref(), Some("ws://localhost:54319"));
        assert!(snapshot.max_reconnect_attempts_reached);
        assert_eq!(snapshot.server_count(), 1);
        assert!(!snapshot.settings.auto_connect);
        assert_eq!(snapshot.settings.extra.get("theme"), Some(&json!("dark")));
    }

    #[test]
    fn tool_count_prefers_list_over_declared_count() {
        let snapshot: StatusSnapshot = serde_json::from_value(json!({
            "mcp_servers": [
                {"name": "A", "tools": [1, 2]},
                {"name": "B", "toolCount": 3},
                {"id": "C", "tools": [], "toolCount": 9},
                {"id": "D"}
            ]
        }))
        .unwrap();

        assert_eq!(snapshot.server_count(), 4);
        assert_eq!(snapshot.tool_count(), 5);
        assert_eq!(snapshot.mcp_servers[2].display_name(), "C");
        assert_eq!(ServerInfo::default().display_name(), "Unknown");
    }

    #[test]
    fn connection_delta_keeps_server_list() {
        let mut snapshot = StatusSnapshot {
            mcp_servers: vec![ServerInfo::named("A", 1), ServerInfo::named("B", 2)],
            ..StatusSnapshot::default()
        };
        let delta = ConnectionDelta {
            is_connected: true,
            bridge_url: Some("ws://bridge".into()),
            ..ConnectionDelta::default()
        };

        snapshot.apply_connection_delta(&delta);

        assert!(snapshot.bridge_connected);
        assert_eq!(snapshot.bridge_url.as_deref(), Some("ws://bridge"));
        assert_eq!(snapshot.server_count(), 2);
    }

    #[test]
    fn server_count_mismatch_invalidates() {
        let snapshot = StatusSnapshot {
            mcp_servers: vec![ServerInfo::named("A", 1), ServerInfo::named("B", 2)],
            ..StatusSnapshot::default()
        };

        let stale = ConnectionDelta {
            server_count: Some(5),
            ..ConnectionDelta::default()
        };
        let same = ConnectionDelta {
            server_count: Some(2),
            ..ConnectionDelta::default()
        };

        assert!(stale.invalidates_servers(&snapshot));
        assert!(!same.invalidates_servers(&snapshot));
        assert!(!ConnectionDelta::default().invalidates_servers(&snapshot));
    }

    #[test]
    fn mark_disabled_clears_in_flight_flag() {
        let mut snapshot = StatusSnapshot {
            is_disabling: true,
            ..StatusSnapshot::default()
        };
        snapshot.mark_disabled();
        assert!(!snapshot.bridge_enabled);
        assert!(!snapshot.is_disabling);
    }
}
