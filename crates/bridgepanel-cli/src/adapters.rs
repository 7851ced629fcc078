//! Port implementations for running the controller in a terminal.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use bridgepanel_core::{
    BackgroundPort, BackgroundRequest, Navigator, PopupSurface, ReconnectButton, RenderedView,
    TransportError,
};
use serde_json::Value;
use tracing::debug;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Background process stand-in answering from a reply script.
pub struct ScriptedBackground {
    replies: Mutex<HashMap<String, VecDeque<Value>>>,
}

impl ScriptedBackground {
    pub fn new(replies: HashMap<String, Vec<Value>>) -> Self {
        let replies = replies
            .into_iter()
            .map(|(name, queue)| (name, queue.into()))
            .collect();
        Self {
            replies: Mutex::new(replies),
        }
    }
}

#[async_trait]
impl BackgroundPort for ScriptedBackground {
    async fn request(&self, request: BackgroundRequest) -> Result<Value, TransportError> {
        let name = request.name();
        let reply = {
            let mut replies = lock(&self.replies);
            replies.get_mut(name).and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            })
        };
        debug!(request = name, answered = reply.is_some(), "Scripted reply");
        match reply {
            Some(Value::Null) | None => Err(TransportError::NoResponder(name)),
            Some(reply) => Ok(reply),
        }
    }
}

/// One line of replay output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Step(String),
    View(RenderedView),
    Toggle(bool),
    ReconnectButton(ReconnectButton),
    OpenTab(String),
    Failed(String),
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(step) => write!(f, "> {step}"),
            Self::View(view) => {
                write!(f, "[view] {}", view.kind.name())?;
                if view.reconnect_visible {
                    write!(f, " (reconnect shown)")?;
                }
                for line in view.html.lines() {
                    write!(f, "\n    {line}")?;
                }
                Ok(())
            }
            Self::Toggle(enabled) => write!(f, "[toggle] {}", if *enabled { "on" } else { "off" }),
            Self::ReconnectButton(button) => write!(f, "[reconnect] {}", button.label()),
            Self::OpenTab(url) => write!(f, "[open] {url}"),
            Self::Failed(reason) => write!(f, "[failed] {reason}"),
        }
    }
}

/// Surface and navigator that write everything down.
#[derive(Default)]
pub struct Transcript {
    entries: Mutex<Vec<TranscriptEntry>>,
}

impl Transcript {
    pub fn record(&self, entry: TranscriptEntry) {
        lock(&self.entries).push(entry);
    }

    pub fn entries(&self) -> Vec<TranscriptEntry> {
        lock(&self.entries).clone()
    }
}

impl PopupSurface for Transcript {
    fn show(&self, view: &RenderedView) {
        self.record(TranscriptEntry::View(view.clone()));
    }

    fn set_toggle(&self, enabled: bool) {
        self.record(TranscriptEntry::Toggle(enabled));
    }

    fn set_reconnect_button(&self, button: ReconnectButton) {
        self.record(TranscriptEntry::ReconnectButton(button));
    }
}

impl Navigator for Transcript {
    fn open_tab(&self, url: &str) {
        self.record(TranscriptEntry::OpenTab(url.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgepanel_core::ViewKind;
    use serde_json::json;

    #[tokio::test]
    async fn last_reply_repeats() {
        let background = ScriptedBackground::new(HashMap::from([(
            "get_servers".to_string(),
            vec![json!({"first": true}), json!({"second": true})],
        )]));

        let first = background.request(BackgroundRequest::GetServers).await;
        let second = background.request(BackgroundRequest::GetServers).await;
        let third = background.request(BackgroundRequest::GetServers).await;

        assert_eq!(first, Ok(json!({"first": true})));
        assert_eq!(second, Ok(json!({"second": true})));
        assert_eq!(third, Ok(json!({"second": true})));
    }

    #[tokio::test]
    async fn null_and_missing_replies_have_no_responder() {
        let background = ScriptedBackground::new(HashMap::from([(
            "connect_bridge".to_string(),
            vec![Value::Null],
        )]));

        assert_eq!(
            background.request(BackgroundRequest::ConnectBridge).await,
            Err(TransportError::NoResponder("connect_bridge"))
        );
        assert_eq!(
            background.request(BackgroundRequest::GetStatus).await,
            Err(TransportError::NoResponder("get_status"))
        );
    }

    #[test]
    fn view_entries_indent_markup() {
        let entry = TranscriptEntry::View(RenderedView {
            kind: ViewKind::Status,
            html: "<a>\n<b>".to_string(),
            reconnect_visible: true,
        });
        assert_eq!(
            entry.to_string(),
            "[view] status (reconnect shown)\n    <a>\n    <b>"
        );
    }
}
