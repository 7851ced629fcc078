//! Push event reconciliation.

use std::sync::Arc;

use bridgepanel_core::{BannerKind, ConnectionDelta, NotificationPayload, PushEvent};
use tracing::{debug, info};

use crate::render;
use crate::state::Shared;
use crate::status::StatusOps;

/// Applies push events from the background to the popup.
pub(crate) struct PushOps<'a> {
    shared: &'a Arc<Shared>,
}

impl<'a> PushOps<'a> {
    pub(crate) const fn new(shared: &'a Arc<Shared>) -> Self {
        Self { shared }
    }

    pub(crate) async fn handle(&self, event: PushEvent) {
        let name = event.event_name();
        let default_title = event.default_title();
        debug!(event = name, "Push event received");

        match event {
            PushEvent::BridgeStatusUpdate(delta) => self.apply_connection_delta(&delta).await,

            PushEvent::ServerDataUpdated | PushEvent::SettingsServerUpdate => {
                self.status().refresh_if_visible(name).await;
            }

            PushEvent::ExtensionDisableStart(progress)
            | PushEvent::ExtensionDisableProgress(progress) => {
                self.shared.show(&render::render_disable_progress(&progress));
            }
            PushEvent::ExtensionDisabled => {
                info!("Bridge disabled");
                self.shared.update_snapshot(|s| s.mark_disabled());
                self.shared.show(&render::render_disabled());
            }

            PushEvent::ExtensionEnableStart => self.shared.show(&render::render_enabling()),
            PushEvent::ExtensionEnabled => {
                info!("Bridge enabled");
                self.status().refresh_if_visible(name).await;
            }

            PushEvent::ExtensionDisableTimeoutWarning(payload)
            | PushEvent::ExtensionConnectionFailureWarning(payload)
            | PushEvent::ExtensionOperationTimeout(payload) => {
                self.show_banner(payload.kind_or(BannerKind::Warning), default_title, &payload);
            }
            PushEvent::ExtensionDisableSuccess(payload)
            | PushEvent::ExtensionEnableSuccess(payload) => {
                self.show_banner(payload.kind_or(BannerKind::Success), default_title, &payload);
            }
            PushEvent::ExtensionDisableError(payload) | PushEvent::ExtensionEnableError(payload) => {
                self.show_banner(payload.kind_or(BannerKind::Error), default_title, &payload);
            }
        }
    }

    const fn status(&self) -> StatusOps<'a> {
        StatusOps::new(self.shared)
    }

    /// Merge connection fields onto the stored snapshot, or fall back to a
    /// full fetch when the stored server list cannot be trusted.
    async fn apply_connection_delta(&self, delta: &ConnectionDelta) {
        let Some(snapshot) = self.shared.snapshot() else {
            debug!("No snapshot yet, fetching full status");
            let _ = self.status().refresh().await;
            return;
        };

        if delta.invalidates_servers(&snapshot) {
            debug!(
                cached = snapshot.server_count(),
                reported = ?delta.server_count,
                "Server count changed, fetching full status"
            );
            let _ = self.status().refresh().await;
            return;
        }

        // Keeps the cached server list when the count matches or is absent.
        if let Some(merged) = self
            .shared
            .update_snapshot(|s| s.apply_connection_delta(delta))
        {
            self.shared.render(&merged);
        }
    }

    fn show_banner(&self, kind: BannerKind, default_title: &str, payload: &NotificationPayload) {
        info!(
            kind = kind.css_class(),
            title = payload.title.as_deref().unwrap_or(default_title),
            "Showing notification"
        );
        self.shared
            .show(&render::render_banner(kind, default_title, payload));

        let timings = &self.shared.deps.config.timings;
        let delay = match kind {
            BannerKind::Warning => timings.warning_revert_delay(),
            BannerKind::Success => timings.success_revert_delay(),
            BannerKind::Error => return,
        };

        let shared = Arc::clone(self.shared);
        let revert = self
            .shared
            .scheduler
            .schedule("revert_banner", delay, async move {
                if shared.is_visible() {
                    shared.rerender();
                }
            });
        self.shared.set_banner_revert(revert);
    }
}
