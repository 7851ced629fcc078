//! Pure view rendering.
//!
//! Every function here maps data to a [`RenderedView`] without touching the
//! surface, so the state machine can be tested without a controller.
//!
//! View precedence for a snapshot:
//!
//! 1. `bridgeEnabled == false` → disabled
//! 2. `isDisabling` → disable progress
//! 3. `isEnabling` → enable progress
//! 4. otherwise → normal status

mod escape;
mod summary;

use bridgepanel_core::{
    BannerKind, NotificationPayload, PanelConfig, ProgressInfo, RenderedView, StatusSnapshot,
    ViewKind,
};

pub use escape::escape_html;
pub use summary::{ConnectionState, HelpText, StatusSummary, reconnect_visible};

/// Pick and render the view for `snapshot`.
pub fn render_snapshot(snapshot: &StatusSnapshot, config: &PanelConfig) -> RenderedView {
    if !snapshot.bridge_enabled {
        render_disabled()
    } else if snapshot.is_disabling {
        render_disable_progress(&snapshot.disable_progress.clone().unwrap_or_default())
    } else if snapshot.is_enabling {
        render_enabling()
    } else {
        render_status(snapshot, config)
    }
}

/// Bridge switched off.
pub fn render_disabled() -> RenderedView {
    view(
        ViewKind::Disabled,
        [
            r#"<div class="status-row"><span class="status-dot grey"></span><span class="status-label">Bridge disabled</span></div>"#.to_string(),
            r#"<div class="help-text">Turn the bridge on to connect to MCP servers.</div>"#.to_string(),
        ]
        .join("\n"),
    )
}

/// Disable in progress.
pub fn render_disable_progress(progress: &ProgressInfo) -> RenderedView {
    let mut parts = vec![
        format!(
            r#"<div class="status-row"><span class="status-dot grey"></span><span class="status-label">{}</span></div>"#,
            progress.stage.label()
        ),
    ];
    if !progress.message.is_empty() {
        parts.push(format!(
            r#"<div class="progress-message">{}</div>"#,
            escape_html(&progress.message)
        ));
    }
    if !progress.operations.is_empty() {
        parts.push(list("pending-operations", &progress.operations));
    }
    view(ViewKind::Disabling, parts.join("\n"))
}

/// Enable in progress.
pub fn render_enabling() -> RenderedView {
    view(
        ViewKind::Enabling,
        r#"<div class="status-row"><span class="status-dot grey"></span><span class="status-label">Enabling bridge...</span></div>"#.to_string(),
    )
}

/// Status could not be fetched.
pub fn render_error(message: &str) -> RenderedView {
    view(
        ViewKind::Error,
        format!(
            r#"<div class="status-row error"><span class="status-dot red"></span><span class="status-label">Error</span></div>
<div class="error-message">{}</div>"#,
            escape_html(message)
        ),
    )
}

/// Transient notification banner.
pub fn render_banner(
    kind: BannerKind,
    default_title: &str,
    payload: &NotificationPayload,
) -> RenderedView {
    let title = payload.title.as_deref().unwrap_or(default_title);
    let mut parts = vec![
        format!(r#"<div class="banner {}">"#, kind.css_class()),
        format!(r#"<div class="banner-title">{}</div>"#, escape_html(title)),
    ];
    if let Some(details) = payload.details.as_deref() {
        parts.push(format!(
            r#"<div class="banner-details">{}</div>"#,
            escape_html(details)
        ));
    }
    if !payload.actions.is_empty() {
        parts.push(list("suggested-actions", &payload.actions));
    }
    parts.push("</div>".to_string());
    view(ViewKind::Banner(kind), parts.join("\n"))
}

/// Normal connection status.
fn render_status(snapshot: &StatusSnapshot, config: &PanelConfig) -> RenderedView {
    let summary = StatusSummary::from_snapshot(snapshot);
    let mut parts = vec![
        format!(
            r#"<div class="status-row"><span class="status-dot {}"></span><span class="status-label">{}</span></div>"#,
            summary.connection.dot_class(),
            summary.connection.label()
        ),
        row("Extension", summary.extension_label),
    ];
    if let Some(url) = snapshot.bridge_url.as_deref() {
        parts.push(row("Bridge", &escape_html(url)));
    }
    parts.push(row("MCP Servers", &summary.server_count.to_string()));
    parts.push(row("Tools", &summary.tool_count.to_string()));

    if summary.show_breakdown {
        let items: Vec<String> = snapshot
            .mcp_servers
            .iter()
            .map(|server| {
                format!(
                    r#"<div class="server-item"><span class="server-name">{}</span><span class="server-tools">{}</span></div>"#,
                    escape_html(server.display_name()),
                    tools_label(server.tool_count())
                )
            })
            .collect();
        parts.push(format!(
            "<div class=\"server-breakdown\">\n{}\n</div>",
            items.join("\n")
        ));
    }

    match summary.help {
        Some(HelpText::MaxAttemptsReached) => parts.push(
            r#"<div class="help-text">Could not reach the bridge after several attempts. Check that it is running, then press Reconnect.</div>"#
                .to_string(),
        ),
        Some(HelpText::StartBridge) => parts.push(format!(
            r#"<div class="help-text">Make sure the bridge is running:<code>{}</code></div>"#,
            escape_html(&config.bridge_command)
        )),
        None => {}
    }

    RenderedView {
        kind: ViewKind::Status,
        html: parts.join("\n"),
        reconnect_visible: summary.reconnect_visible,
    }
}

fn view(kind: ViewKind, html: String) -> RenderedView {
    RenderedView {
        kind,
        html,
        reconnect_visible: false,
    }
}

fn row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="status-row"><span class="label">{label}</span><span class="value">{value}</span></div>"#
    )
}

fn list(class: &str, items: &[String]) -> String {
    let items: Vec<String> = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul class=\"{class}\">{}</ul>", items.concat())
}

fn tools_label(count: u64) -> String {
    if count == 1 {
        "1 tool".to_string()
    } else {
        format!("{count} tools")
    }
}
