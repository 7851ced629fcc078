//! Dependency injection for `PopupController`.
//!
//! All dependencies are injected as trait objects to keep the controller
//! independent of the platform runtime.

use std::sync::Arc;

use bridgepanel_core::{BackgroundPort, Navigator, PanelConfig, PopupSurface};

/// Dependencies required to construct a `PopupController`.
///
/// # Example
///
/// ```ignore
/// let deps = PanelDeps::new(background, surface, navigator, PanelConfig::default());
/// let controller = PopupController::new(deps);
/// ```
pub struct PanelDeps {
    /// Messaging channel to the background bridge manager.
    pub(crate) background: Arc<dyn BackgroundPort>,
    /// The popup's DOM.
    pub(crate) surface: Arc<dyn PopupSurface>,
    /// Tab opener for the external and settings links.
    pub(crate) navigator: Arc<dyn Navigator>,
    pub(crate) config: PanelConfig,
}

impl PanelDeps {
    pub fn new(
        background: Arc<dyn BackgroundPort>,
        surface: Arc<dyn PopupSurface>,
        navigator: Arc<dyn Navigator>,
        config: PanelConfig,
    ) -> Self {
        Self {
            background,
            surface,
            navigator,
            config,
        }
    }
}
