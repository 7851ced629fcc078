//! Push events sent by the background process at any time.

use serde::{Deserialize, Serialize};

use crate::domain::{ConnectionDelta, ProgressInfo};

/// Visual treatment of a transient banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    /// Reverts to the status view after a while.
    Warning,
    /// Stays until the next render.
    Error,
    /// Reverts to the status view after a short while.
    Success,
}

impl BannerKind {
    /// CSS modifier class for the banner.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// Body of warning, error and success notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Suggested next steps, shown as a list.
    pub actions: Vec<String>,
    /// Explicit severity; only `warning` and `error` are sent in practice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<BannerKind>,
}

impl NotificationPayload {
    /// The explicit severity, or `fallback` when the event did not carry one.
    pub fn kind_or(&self, fallback: BannerKind) -> BannerKind {
        self.severity.unwrap_or(fallback)
    }
}

/// Inbound push events.
///
/// Every event the background may send is a variant here, so handlers match
/// exhaustively instead of dispatching on raw type strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PushEvent {
    // ========== Connection Events ==========
    /// Connection fields changed.
    BridgeStatusUpdate(ConnectionDelta),

    /// The background refreshed its server data.
    ServerDataUpdated,

    /// Server configuration changed from the settings page.
    SettingsServerUpdate,

    // ========== Disable Lifecycle ==========
    /// A disable operation started.
    ExtensionDisableStart(ProgressInfo),

    /// A disable operation advanced.
    ExtensionDisableProgress(ProgressInfo),

    /// The bridge is now disabled.
    ExtensionDisabled,

    // ========== Enable Lifecycle ==========
    /// An enable operation started.
    ExtensionEnableStart,

    /// The bridge is now enabled.
    ExtensionEnabled,

    // ========== Notifications ==========
    ExtensionDisableTimeoutWarning(NotificationPayload),
    ExtensionDisableSuccess(NotificationPayload),
    ExtensionDisableError(NotificationPayload),
    ExtensionEnableSuccess(NotificationPayload),
    ExtensionEnableError(NotificationPayload),
    ExtensionConnectionFailureWarning(NotificationPayload),
    ExtensionOperationTimeout(NotificationPayload),
}

impl PushEvent {
    /// Wire tag of the event.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::BridgeStatusUpdate(_) => "bridge_status_update",
            Self::ServerDataUpdated => "server_data_updated",
            Self::SettingsServerUpdate => "settings_server_update",
            Self::ExtensionDisableStart(_) => "extension_disable_start",
            Self::ExtensionDisableProgress(_) => "extension_disable_progress",
            Self::ExtensionDisabled => "extension_disabled",
            Self::ExtensionEnableStart => "extension_enable_start",
            Self::ExtensionEnabled => "extension_enabled",
            Self::ExtensionDisableTimeoutWarning(_) => "extension_disable_timeout_warning",
            Self::ExtensionDisableSuccess(_) => "extension_disable_success",
            Self::ExtensionDisableError(_) => "extension_disable_error",
            Self::ExtensionEnableSuccess(_) => "extension_enable_success",
            Self::ExtensionEnableError(_) => "extension_enable_error",
            Self::ExtensionConnectionFailureWarning(_) => "extension_connection_failure_warning",
            Self::ExtensionOperationTimeout(_) => "extension_operation_timeout",
        }
    }

    /// Banner title used when a notification arrives without one.
    pub const fn default_title(&self) -> &'static str {
        match self {
            Self::ExtensionDisableTimeoutWarning(_) => "Disable is taking longer than expected",
            Self::ExtensionDisableSuccess(_) => "Bridge disabled",
            Self::ExtensionDisableError(_) => "Failed to disable bridge",
            Self::ExtensionEnableSuccess(_) => "Bridge enabled",
            Self::ExtensionEnableError(_) => "Failed to enable bridge",
            Self::ExtensionConnectionFailureWarning(_) => "Connection problem",
            Self::ExtensionOperationTimeout(_) => "Operation timed out",
            Self::BridgeStatusUpdate(_)
            | Self::ServerDataUpdated
            | Self::SettingsServerUpdate
            | Self::ExtensionDisableStart(_)
            | Self::ExtensionDisableProgress(_)
            | Self::ExtensionDisabled
            | Self::ExtensionEnableStart
            | Self::ExtensionEnabled => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DisableStage;
    use serde_json::json;

    #[test]
    fn decodes_connection_delta() {
        let event: PushEvent = serde_json::from_value(json!({
            "type": "bridge_status_update",
            "isConnected": true,
            "isConnecting": false,
            "bridgeUrl": "ws://localhost:54319",
            "serverCount": 5
        }))
        .unwrap();

        let PushEvent::BridgeStatusUpdate(delta) = event else {
            panic!("expected bridge_status_update, got {event:?}");
        };
        assert!(delta.is_connected);
        assert_eq!(delta.server_count, Some(5));
    }

    #[test]
    fn unit_events_ignore_extra_fields() {
        let event: PushEvent =
            serde_json::from_value(json!({"type": "server_data_updated", "source": "poll"}))
                .unwrap();
        assert_eq!(event, PushEvent::ServerDataUpdated);
    }

    #[test]
    fn disable_start_defaults_to_checking() {
        let event: PushEvent =
            serde_json::from_value(json!({"type": "extension_disable_start"})).unwrap();
        assert_eq!(
            event,
            PushEvent::ExtensionDisableStart(ProgressInfo::at_stage(DisableStage::Checking))
        );
    }

    #[test]
    fn decodes_notification_payload() {
        let event: PushEvent = serde_json::from_value(json!({
            "type": "extension_operation_timeout",
            "title": "Still waiting",
            "details": "2 operations pending",
            "actions": ["Wait", "Force disable"],
            "severity": "error"
        }))
        .unwrap();

        let PushEvent::ExtensionOperationTimeout(payload) = &event else {
            panic!("expected extension_operation_timeout, got {event:?}");
        };
        assert_eq!(payload.actions.len(), 2);
        assert_eq!(payload.kind_or(BannerKind::Warning), BannerKind::Error);
        assert_eq!(event.event_name(), "extension_operation_timeout");
    }

    #[test]
    fn event_names_round_trip_through_the_tag() {
        let events = vec![
            PushEvent::ServerDataUpdated,
            PushEvent::SettingsServerUpdate,
            PushEvent::ExtensionDisabled,
            PushEvent::ExtensionEnableStart,
            PushEvent::ExtensionEnabled,
            PushEvent::ExtensionDisableProgress(ProgressInfo::default()),
            PushEvent::ExtensionConnectionFailureWarning(NotificationPayload::default()),
        ];

        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["type"], event.event_name());
        }
    }

    #[test]
    fn unknown_event_type_fails_to_decode() {
        let result = serde_json::from_value::<PushEvent>(json!({"type": "mystery"}));
        assert!(result.is_err());
    }
}
