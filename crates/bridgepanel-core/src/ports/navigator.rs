//! Tab navigation port.

/// Opens pages in a new browser tab.
pub trait Navigator: Send + Sync {
    /// Open `url` in a new tab. Fire-and-forget.
    fn open_tab(&self, url: &str);
}

/// Navigator that goes nowhere, for tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn open_tab(&self, _url: &str) {}
}
