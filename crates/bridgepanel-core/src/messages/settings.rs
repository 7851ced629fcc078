//! Persisted settings change notifications.
//!
//! The platform storage broadcasts a change record whenever any window writes
//! the shared settings object. The popup only looks at `bridgeEnabled`.

use serde::{Deserialize, Serialize};

/// The slice of persisted settings the popup cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    #[serde(
        rename = "bridgeEnabled",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bridge_enabled: Option<bool>,
}

/// Old and new value of the persisted settings object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsChange {
    pub old_value: Option<PersistedSettings>,
    pub new_value: Option<PersistedSettings>,
}

impl SettingsChange {
    /// The new `bridgeEnabled` flag, if it differs from the old one.
    pub fn bridge_enabled_changed(&self) -> Option<bool> {
        let new = self.new_value.as_ref()?.bridge_enabled?;
        let old = self.old_value.as_ref().and_then(|s| s.bridge_enabled);
        (old != Some(new)).then_some(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn change(old: serde_json::Value, new: serde_json::Value) -> SettingsChange {
        serde_json::from_value(json!({"oldValue": old, "newValue": new})).unwrap()
    }

    #[test]
    fn detects_flip() {
        let c = change(json!({"bridgeEnabled": true}), json!({"bridgeEnabled": false}));
        assert_eq!(c.bridge_enabled_changed(), Some(false));
    }

    #[test]
    fn unchanged_flag_is_ignored() {
        let c = change(
            json!({"bridgeEnabled": true, "theme": "dark"}),
            json!({"bridgeEnabled": true, "theme": "light"}),
        );
        assert_eq!(c.bridge_enabled_changed(), None);
    }

    #[test]
    fn first_write_counts_as_change() {
        let c = change(json!(null), json!({"bridgeEnabled": true}));
        assert_eq!(c.bridge_enabled_changed(), Some(true));
    }

    #[test]
    fn removed_flag_is_ignored() {
        let c = change(json!({"bridgeEnabled": true}), json!({}));
        assert_eq!(c.bridge_enabled_changed(), None);
    }
}
