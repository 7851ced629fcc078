//! Status fetch operations.

use std::sync::Arc;

use bridgepanel_core::{
    ActionReply, BackgroundRequest, PanelError, StatusSnapshot, parse_status_reply,
};
use tracing::{debug, warn};

use crate::render;
use crate::state::Shared;

/// Full-status fetch and server-list refresh.
pub(crate) struct StatusOps<'a> {
    shared: &'a Arc<Shared>,
}

impl<'a> StatusOps<'a> {
    pub(crate) const fn new(shared: &'a Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Send `get_status` and decode the reply without touching state.
    pub(crate) async fn fetch_snapshot(&self) -> Result<StatusSnapshot, PanelError> {
        let reply = self
            .shared
            .deps
            .background
            .request(BackgroundRequest::GetStatus)
            .await?;
        parse_status_reply(reply)
    }

    /// Fetch, store and render the full status.
    ///
    /// The toggle follows the fetched `bridgeEnabled` flag. On failure the
    /// error view is shown and the toggle falls back to enabled. Concurrent calls are not de-duplicated; the last reply wins.
    pub(crate) async fn refresh(&self) -> Result<(), PanelError> {
        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                debug!(
                    enabled = snapshot.bridge_enabled,
                    connected = snapshot.bridge_connected,
                    servers = snapshot.server_count(),
                    "Status fetched"
                );
                self.shared.render(&snapshot);
                self.shared.deps.surface.set_toggle(snapshot.bridge_enabled);
                self.shared.store_snapshot(snapshot);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch status");
                self.shared.show(&render::render_error(&e.user_message()));
                self.shared.deps.surface.set_toggle(true);
                Err(e)
            }
        }
    }

    /// Ask the background to refresh its server list, then re-fetch status
    /// once the refresh has had time to land.
    ///
    /// Best effort: failures are logged and returned, never rendered.
    pub(crate) async fn refresh_servers(&self) -> Result<(), PanelError> {
        match self
            .shared
            .deps
            .background
            .request(BackgroundRequest::GetServers)
            .await
        {
            Ok(_) => {
                let delay = self.shared.deps.config.timings.server_refresh_delay();
                let shared = Arc::clone(self.shared);
                self.shared
                    .scheduler
                    .schedule("refresh_after_servers", delay, async move {
                        // Failure already rendered as the error view.
                        let _ = StatusOps::new(&shared).refresh().await;
                    });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Server refresh request failed");
                Err(e.into())
            }
        }
    }

    /// Full fetch when the popup is on screen; otherwise leave it to the
    /// visibility handler.
    pub(crate) async fn refresh_if_visible(&self, reason: &'static str) {
        if self.shared.is_visible() {
            debug!(reason, "Refreshing status");
            let _ = self.refresh().await;
        } else {
            debug!(reason, "Popup hidden, deferring refresh");
        }
    }

    /// Send an action request and decode its `{success, error}` reply.
    pub(crate) async fn send_action(&self, request: BackgroundRequest) -> Result<(), PanelError> {
        let reply = self.shared.deps.background.request(request).await?;
        ActionReply::from_value(reply)?.into_result()
    }
}
