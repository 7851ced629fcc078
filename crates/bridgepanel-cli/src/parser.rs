//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Render popup views and replay popup sessions without a browser.
#[derive(Parser)]
#[command(name = "bridgepanel")]
#[command(about = "Render and replay the bridge popup outside the browser")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// URL opened by the project link
    #[arg(long = "external-url", env = "BRIDGEPANEL_EXTERNAL_URL", global = true)]
    pub external_url: Option<String>,

    /// Settings document opened by settings links
    #[arg(long = "settings-page", env = "BRIDGEPANEL_SETTINGS_PAGE", global = true)]
    pub settings_page: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
