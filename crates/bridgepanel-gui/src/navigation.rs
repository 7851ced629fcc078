//! Navigation operations.

use tracing::debug;

use crate::deps::PanelDeps;

/// Opens the external project page and the settings document.
pub(crate) struct NavigationOps<'a> {
    deps: &'a PanelDeps,
}

impl<'a> NavigationOps<'a> {
    pub(crate) const fn new(deps: &'a PanelDeps) -> Self {
        Self { deps }
    }

    pub(crate) fn open_external_site(&self) {
        let url = &self.deps.config.external_url;
        debug!(url = %url, "Opening external site");
        self.deps.navigator.open_tab(url);
    }

    /// Open settings, deep-linking `section` (defaults to `general`).
    pub(crate) fn open_settings(&self, section: Option<&str>) {
        let url = self.deps.config.settings_url(section);
        debug!(url = %url, "Opening settings");
        self.deps.navigator.open_tab(&url);
    }
}
