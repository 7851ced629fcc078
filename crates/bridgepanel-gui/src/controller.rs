//! PopupController - the popup orchestration facade.
//!
//! Adapters forward every platform event (load, visibility change, push
//! message, storage change, button click) to this facade.

use std::sync::Arc;

use bridgepanel_core::{PanelError, PushEvent, SettingsChange, StatusSnapshot, UiAction};
use tracing::{debug, info};

use crate::actions::ActionOps;
use crate::deps::PanelDeps;
use crate::navigation::NavigationOps;
use crate::push::PushOps;
use crate::state::Shared;
use crate::status::StatusOps;

/// Controller for one popup window.
///
/// Cloning is cheap and clones share state, so adapters can hand a clone to
/// each event listener. Must be driven from within a tokio runtime: follow-up
/// work is scheduled as tokio tasks.
///
/// # Construction
///
/// ```ignore
/// let controller = PopupController::new(PanelDeps::new(background, surface, navigator, config));
/// controller.initialize().await;
/// ```
#[derive(Clone)]
pub struct PopupController {
    shared: Arc<Shared>,
}

impl PopupController {
    pub fn new(deps: PanelDeps) -> Self {
        Self {
            shared: Arc::new(Shared::new(deps)),
        }
    }

    // Accessors for ops modules
    const fn status_ops(&self) -> StatusOps<'_> {
        StatusOps::new(&self.shared)
    }

    const fn push_ops(&self) -> PushOps<'_> {
        PushOps::new(&self.shared)
    }

    const fn action_ops(&self) -> ActionOps<'_> {
        ActionOps::new(&self.shared)
    }

    fn navigation_ops(&self) -> NavigationOps<'_> {
        NavigationOps::new(&self.shared.deps)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Popup opened: optimistic toggle, full fetch, server refresh.
    pub async fn initialize(&self) {
        info!("Initializing popup");
        self.shared.deps.surface.set_toggle(true);
        let _ = self.status_ops().refresh().await;
        let _ = self.status_ops().refresh_servers().await;
    }

    /// Page visibility changed.
    ///
    /// Becoming visible refreshes status and the server list; becoming hidden
    /// only records the flag so deferred refreshes wait for the next show.
    pub async fn set_visible(&self, visible: bool) {
        let was_visible = self.shared.set_visible(visible);
        if visible && !was_visible {
            debug!("Popup became visible, refreshing");
            let _ = self.status_ops().refresh().await;
            let _ = self.status_ops().refresh_servers().await;
        }
    }

    /// Popup closed: cancel every pending follow-up.
    pub fn shutdown(&self) {
        info!("Popup closing");
        self.shared.scheduler.shutdown();
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// Fetch, store and render the full status.
    pub async fn refresh_status(&self) -> Result<(), PanelError> {
        self.status_ops().refresh().await
    }

    /// Ask the background to refresh its server list.
    pub async fn refresh_servers(&self) -> Result<(), PanelError> {
        self.status_ops().refresh_servers().await
    }

    /// Re-render the stored snapshot.
    pub fn rerender(&self) {
        self.shared.rerender();
    }

    // =========================================================================
    // Inbound events
    // =========================================================================

    /// Apply a push event from the background.
    pub async fn handle_push(&self, event: PushEvent) {
        self.push_ops().handle(event).await;
    }

    /// Apply a persisted-settings change broadcast.
    pub fn handle_settings_change(&self, change: &SettingsChange) {
        self.action_ops().apply_settings_change(change);
    }

    // =========================================================================
    // User actions
    // =========================================================================

    /// Dispatch a control event from the popup.
    pub async fn dispatch(&self, action: UiAction) -> Result<(), PanelError> {
        match action {
            UiAction::ToggleBridge => self.toggle_bridge().await.map(|_| ()),
            UiAction::Reconnect => self.reconnect().await,
            UiAction::OpenExternalSite => {
                self.open_external_site();
                Ok(())
            }
            UiAction::OpenSettings { section } => {
                self.open_settings(section.as_deref());
                Ok(())
            }
        }
    }

    /// Flip the bridge on/off. Returns the requested state.
    pub async fn toggle_bridge(&self) -> Result<bool, PanelError> {
        self.action_ops().toggle_bridge().await
    }

    /// Ask the background to reconnect now.
    pub async fn reconnect(&self) -> Result<(), PanelError> {
        self.action_ops().reconnect().await
    }

    pub fn open_external_site(&self) {
        self.navigation_ops().open_external_site();
    }

    /// Open settings at `section` (defaults to `general`).
    pub fn open_settings(&self, section: Option<&str>) {
        self.navigation_ops().open_settings(section);
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Last known snapshot.
    pub fn snapshot(&self) -> Option<StatusSnapshot> {
        self.shared.snapshot()
    }

    pub fn is_visible(&self) -> bool {
        self.shared.is_visible()
    }

    /// Follow-up tasks still waiting for their delay.
    pub fn pending_tasks(&self) -> usize {
        self.shared.scheduler.pending()
    }
}
