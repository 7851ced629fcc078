//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the view a status snapshot renders to
    Render {
        /// JSON file holding a snapshot or a full `get_status` reply
        snapshot: PathBuf,
    },

    /// Replay a popup session against scripted background replies
    Replay {
        /// JSON scenario file
        scenario: PathBuf,
    },
}
