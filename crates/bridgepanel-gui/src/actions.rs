//! User actions and cross-window sync.

use std::sync::Arc;

use bridgepanel_core::{BackgroundRequest, PanelError, ReconnectButton, SettingsChange};
use tracing::{debug, error, info, warn};

use crate::render;
use crate::state::Shared;
use crate::status::StatusOps;

/// Toggle, reconnect and settings-sync handler.
pub(crate) struct ActionOps<'a> {
    shared: &'a Arc<Shared>,
}

impl<'a> ActionOps<'a> {
    pub(crate) const fn new(shared: &'a Arc<Shared>) -> Self {
        Self { shared }
    }

    const fn status(&self) -> StatusOps<'a> {
        StatusOps::new(self.shared)
    }

    /// Flip the bridge on/off.
    ///
    /// Reads the current flag from a fresh fetch, updates the switch
    /// optimistically and rolls it back if the background refuses.
    /// Returns the requested state.
    pub(crate) async fn toggle_bridge(&self) -> Result<bool, PanelError> {
        let current = match self.status().fetch_snapshot().await {
            Ok(snapshot) => {
                let enabled = snapshot.bridge_enabled;
                self.shared.store_snapshot(snapshot);
                enabled
            }
            Err(e) => {
                warn!(error = %e, "Could not read bridge state, using last known value");
                self.shared.snapshot().is_none_or(|s| s.bridge_enabled)
            }
        };
        let enabled = !current;
        info!(enabled, "Toggling bridge");

        let surface = &self.shared.deps.surface;
        surface.set_toggle(enabled);
        if enabled {
            self.shared.show(&render::render_enabling());
        }

        match self
            .status()
            .send_action(BackgroundRequest::ToggleBridgeEnabled { enabled })
            .await
        {
            Ok(()) => {
                self.schedule_refresh("refresh_after_toggle");
                Ok(enabled)
            }
            Err(e) => {
                error!(error = %e, enabled, "Failed to toggle bridge");
                surface.set_toggle(current);
                self.shared.rerender();
                Err(e)
            }
        }
    }

    /// Ask the background to reconnect now.
    ///
    /// The button is restored after a fixed delay whatever the outcome; the
    /// real connection state arrives through the next push or fetch.
    pub(crate) async fn reconnect(&self) -> Result<(), PanelError> {
        let surface = &self.shared.deps.surface;
        surface.set_reconnect_button(ReconnectButton::Busy);

        let result = self
            .status()
            .send_action(BackgroundRequest::ConnectBridge)
            .await;
        match &result {
            Ok(()) => info!("Reconnect requested"),
            Err(e) => error!(error = %e, "Reconnect request failed"),
        }

        let delay = self.shared.deps.config.timings.reconnect_restore_delay();
        let shared = Arc::clone(self.shared);
        self.shared
            .scheduler
            .schedule("restore_reconnect_button", delay, async move {
                shared
                    .deps
                    .surface
                    .set_reconnect_button(ReconnectButton::Idle);
            });

        result
    }

    /// Follow a `bridgeEnabled` change written by another window.
    pub(crate) fn apply_settings_change(&self, change: &SettingsChange) {
        let Some(enabled) = change.bridge_enabled_changed() else {
            debug!("Persisted settings changed, bridge flag untouched");
            return;
        };
        info!(enabled, "Bridge flag changed in another window");
        self.shared.deps.surface.set_toggle(enabled);
        self.schedule_refresh("refresh_after_settings_change");
    }

    fn schedule_refresh(&self, label: &'static str) {
        let delay = self.shared.deps.config.timings.toggle_refresh_delay();
        let shared = Arc::clone(self.shared);
        self.shared.scheduler.schedule(label, delay, async move {
            let _ = StatusOps::new(&shared).refresh().await;
        });
    }
}
