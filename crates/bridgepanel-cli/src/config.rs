//! Panel configuration from command-line flags and the environment.

use bridgepanel_core::PanelConfig;

use crate::error::CliError;
use crate::parser::Cli;

/// Build and validate the panel configuration.
///
/// Flags win over environment variables (clap resolves both), which win
/// over the built-in defaults.
pub fn panel_config(cli: &Cli) -> Result<PanelConfig, CliError> {
    let mut config = PanelConfig::default();
    if let Some(url) = &cli.external_url {
        config.external_url.clone_from(url);
    }
    if let Some(page) = &cli.settings_page {
        config.settings_page.clone_from(page);
    }
    config.validate()?;
    Ok(config)
}
