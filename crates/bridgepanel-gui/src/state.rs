//! State shared by the controller and its scheduled tasks.

use std::sync::{Mutex, MutexGuard, PoisonError};

use bridgepanel_core::{RenderedView, StatusSnapshot};
use tracing::debug;

use crate::deps::PanelDeps;
use crate::render;
use crate::scheduler::{ScheduledTask, Scheduler};

/// Mutable popup state.
#[derive(Debug)]
pub(crate) struct PanelState {
    /// Last known snapshot; `None` until the first successful fetch.
    pub(crate) snapshot: Option<StatusSnapshot>,
    pub(crate) visible: bool,
    /// Revert timer of the banner on screen, if it has one.
    pub(crate) banner_revert: Option<ScheduledTask>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            snapshot: None,
            visible: true,
            banner_revert: None,
        }
    }
}

/// Everything one popup instance owns.
///
/// The state lock is never held across an await.
pub(crate) struct Shared {
    pub(crate) deps: PanelDeps,
    pub(crate) scheduler: Scheduler,
    state: Mutex<PanelState>,
}

impl Shared {
    pub(crate) fn new(deps: PanelDeps) -> Self {
        Self {
            deps,
            scheduler: Scheduler::new(),
            state: Mutex::new(PanelState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, PanelState> {
        // A panic while holding the lock leaves plain data behind; keep going.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn snapshot(&self) -> Option<StatusSnapshot> {
        self.state().snapshot.clone()
    }

    /// Overwrite the stored snapshot. Last write wins.
    pub(crate) fn store_snapshot(&self, snapshot: StatusSnapshot) {
        self.state().snapshot = Some(snapshot);
    }

    /// Patch the stored snapshot in place and return the patched copy.
    pub(crate) fn update_snapshot<F>(&self, patch: F) -> Option<StatusSnapshot>
    where
        F: FnOnce(&mut StatusSnapshot),
    {
        let mut state = self.state();
        let snapshot = state.snapshot.as_mut()?;
        patch(snapshot);
        Some(snapshot.clone())
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.state().visible
    }

    /// Set visibility, returning the previous value.
    pub(crate) fn set_visible(&self, visible: bool) -> bool {
        std::mem::replace(&mut self.state().visible, visible)
    }

    /// Put `view` on screen. Any pending banner revert is cancelled: the
    /// banner it would revert is gone.
    pub(crate) fn show(&self, view: &RenderedView) {
        let superseded = self.state().banner_revert.take();
        if let Some(revert) = superseded {
            revert.cancel();
        }
        self.deps.surface.show(view);
    }

    /// Track the revert timer of the banner just shown.
    pub(crate) fn set_banner_revert(&self, task: ScheduledTask) {
        self.state().banner_revert = Some(task);
    }

    /// Render `snapshot` through the state machine.
    pub(crate) fn render(&self, snapshot: &StatusSnapshot) {
        let view = render::render_snapshot(snapshot, &self.deps.config);
        debug!(view = view.kind.name(), "Rendering snapshot");
        self.show(&view);
    }

    /// Re-render the stored snapshot, if there is one.
    pub(crate) fn rerender(&self) {
        match self.snapshot() {
            Some(snapshot) => self.render(&snapshot),
            None => debug!("No snapshot to render yet"),
        }
    }
}
