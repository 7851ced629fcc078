//! Replay command handler.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use bridgepanel_core::PanelConfig;
use bridgepanel_gui::{PanelDeps, PopupController};
use tracing::info;

use crate::adapters::{ScriptedBackground, Transcript, TranscriptEntry};
use crate::error::CliError;
use crate::scenario::{Scenario, Step};

/// Execute the replay command: run the scenario in `path` and print the
/// transcript.
pub async fn execute(config: &PanelConfig, path: &Path) -> Result<(), CliError> {
    let scenario = Scenario::load(path)?;
    let config = scenario.config(config)?;
    info!(steps = scenario.steps.len(), path = %path.display(), "Replaying scenario");

    for entry in replay(config, scenario).await {
        println!("{entry}");
    }
    Ok(())
}

/// Run `scenario` against a fresh controller and return everything it did.
///
/// Pending follow-ups are cancelled once the last step ran, as when the
/// popup closes.
pub async fn replay(config: PanelConfig, scenario: Scenario) -> Vec<TranscriptEntry> {
    let transcript = Arc::new(Transcript::default());
    let controller = PopupController::new(PanelDeps::new(
        Arc::new(ScriptedBackground::new(scenario.replies)),
        transcript.clone(),
        transcript.clone(),
        config,
    ));

    for step in scenario.steps {
        transcript.record(TranscriptEntry::Step(step.to_string()));
        match step {
            Step::Initialize => controller.initialize().await,
            Step::Push(event) => controller.handle_push(event).await,
            Step::SettingsChange(change) => controller.handle_settings_change(&change),
            Step::Visibility { visible } => controller.set_visible(visible).await,
            Step::Action(action) => {
                if let Err(e) = controller.dispatch(action).await {
                    transcript.record(TranscriptEntry::Failed(e.to_string()));
                }
            }
            Step::Wait { ms } => tokio::time::sleep(Duration::from_millis(ms)).await,
        }
    }

    controller.shutdown();
    transcript.entries()
}
