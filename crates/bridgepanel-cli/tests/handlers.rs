//! Render and replay handlers against files on disk.

use std::io::Write;

use bridgepanel_cli::CliError;
use bridgepanel_cli::adapters::TranscriptEntry;
use bridgepanel_cli::handlers::{render, replay};
use bridgepanel_cli::scenario::Scenario;
use bridgepanel_core::{BannerKind, PanelConfig, ReconnectButton, ViewKind};
use serde_json::{Value, json};
use tempfile::NamedTempFile;

fn json_file(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{value}").unwrap();
    file
}

fn views(entries: &[TranscriptEntry]) -> Vec<ViewKind> {
    entries
        .iter()
        .filter_map(|e| match e {
            TranscriptEntry::View(view) => Some(view.kind),
            _ => None,
        })
        .collect()
}

#[test]
fn render_accepts_a_bare_snapshot() {
    let file = json_file(&json!({
        "bridgeEnabled": true,
        "bridge_connected": true,
        "mcp_servers": [{"name": "files", "tools": [{}, {}]}]
    }));

    let view = render::render_file(&PanelConfig::default(), file.path()).unwrap();

    assert_eq!(view.kind, ViewKind::Status);
    assert!(view.html.contains("files"));
    assert!(view.html.contains("2 tools"));
}

#[test]
fn render_accepts_a_status_reply() {
    let file = json_file(&json!({"status": "ok", "bridgeEnabled": false}));

    let view = render::render_file(&PanelConfig::default(), file.path()).unwrap();

    assert_eq!(view.kind, ViewKind::Disabled);
}

#[test]
fn render_rejects_an_error_reply() {
    let file = json_file(&json!({"status": "error", "error": "Bridge crashed"}));

    let err = render::render_file(&PanelConfig::default(), file.path()).unwrap_err();

    assert!(matches!(err, CliError::Input(ref msg) if msg.contains("Bridge crashed")));
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn render_reports_missing_file_as_io() {
    let dir = tempfile::tempdir().unwrap();

    let err = render::render_file(&PanelConfig::default(), &dir.path().join("missing.json"))
        .unwrap_err();

    assert!(matches!(err, CliError::Io(_)));
}

#[tokio::test(start_paused = true)]
async fn replay_runs_a_session() {
    let file = json_file(&json!({
        "replies": {
            "get_status": [{"status": "ok", "bridgeEnabled": true, "bridge_connected": true}],
            "get_servers": [{"success": true}],
            "connect_bridge": [null]
        },
        "steps": [
            {"step": "initialize"},
            {"step": "push", "type": "extension_connection_failure_warning", "details": "Bridge not reachable"},
            {"step": "action", "action": "reconnect"},
            {"step": "wait", "ms": 10001},
            {"step": "action", "action": "open_external_site"}
        ]
    }));
    let scenario = Scenario::load(file.path()).unwrap();
    let config = scenario.config(&PanelConfig::default()).unwrap();

    let entries = replay::replay(config, scenario).await;

    assert_eq!(entries[0], TranscriptEntry::Step("initialize".to_string()));
    assert_eq!(
        views(&entries),
        vec![
            ViewKind::Status,
            ViewKind::Banner(BannerKind::Warning),
            // follow-up fetch after the server refresh replaces the banner
            ViewKind::Status,
        ]
    );
    assert!(entries.contains(&TranscriptEntry::Failed(
        "no responder for connect_bridge".to_string()
    )));
    assert!(entries.contains(&TranscriptEntry::ReconnectButton(ReconnectButton::Idle)));
    assert_eq!(
        entries.last(),
        Some(&TranscriptEntry::OpenTab(
            "https://modelcontextprotocol.io".to_string()
        ))
    );
}

#[tokio::test(start_paused = true)]
async fn replay_uses_scenario_timings() {
    let scenario: Scenario = serde_json::from_value(json!({
        "timings": {"reconnect_restore_delay_ms": 10},
        "replies": {"connect_bridge": [{"success": true}]},
        "steps": [
            {"step": "action", "action": "reconnect"},
            {"step": "wait", "ms": 11}
        ]
    }))
    .unwrap();
    let config = scenario.config(&PanelConfig::default()).unwrap();

    let entries = replay::replay(config, scenario).await;

    assert_eq!(
        entries,
        vec![
            TranscriptEntry::Step("action Reconnect".to_string()),
            TranscriptEntry::ReconnectButton(ReconnectButton::Busy),
            TranscriptEntry::Step("wait 11ms".to_string()),
            TranscriptEntry::ReconnectButton(ReconnectButton::Idle),
        ]
    );
}

#[tokio::test]
async fn replay_rejects_malformed_scenario() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"steps\": [{{\"step\": \"teleport\"}}]}}").unwrap();

    let err = Scenario::load(file.path()).unwrap_err();

    assert!(matches!(err, CliError::Input(_)));
}
