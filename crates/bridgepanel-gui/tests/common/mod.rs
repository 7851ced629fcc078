//! Shared fakes for controller tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bridgepanel_core::{
    BackgroundPort, BackgroundRequest, NoopNavigator, PanelConfig, PopupSurface, ReconnectButton,
    RenderedView, TransportError, ViewKind,
};
use bridgepanel_gui::{PanelDeps, PopupController};
use serde_json::{Value, json};

/// Background fake with scripted replies per request type.
///
/// Replies queue up per request name and are served in order; once a queue
/// is drained the last served reply repeats. Requests never scripted get
/// `NoResponder`.
#[derive(Default)]
pub struct FakeBackground {
    replies: Mutex<HashMap<&'static str, Script>>,
    requests: Mutex<Vec<BackgroundRequest>>,
}

type Reply = Result<Value, TransportError>;

#[derive(Default)]
struct Script {
    queued: VecDeque<Reply>,
    last: Option<Reply>,
}

impl FakeBackground {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, name: &'static str, value: Value) {
        self.push(name, Ok(value));
    }

    pub fn fail(&self, name: &'static str, error: TransportError) {
        self.push(name, Err(error));
    }

    fn push(&self, name: &'static str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(name)
            .or_default()
            .queued
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<BackgroundRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.name() == name)
            .count()
    }
}

#[async_trait]
impl BackgroundPort for FakeBackground {
    async fn request(&self, request: BackgroundRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        let mut replies = self.replies.lock().unwrap();
        let Some(script) = replies.get_mut(request.name()) else {
            return Err(TransportError::NoResponder(request.name()));
        };
        if let Some(reply) = script.queued.pop_front() {
            script.last = Some(reply);
        }
        script
            .last
            .clone()
            .unwrap_or(Err(TransportError::NoResponder(request.name())))
    }
}

/// Everything the controller did to the surface, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Show(RenderedView),
    Toggle(bool),
    Reconnect(ReconnectButton),
}

#[derive(Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_view(&self) -> RenderedView {
        self.events()
            .into_iter()
            .rev()
            .find_map(|e| match e {
                SurfaceEvent::Show(view) => Some(view),
                _ => None,
            })
            .expect("no view shown yet")
    }

    pub fn last_kind(&self) -> ViewKind {
        self.last_view().kind
    }

    pub fn toggles(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SurfaceEvent::Toggle(enabled) => Some(enabled),
                _ => None,
            })
            .collect()
    }

    pub fn last_reconnect(&self) -> Option<ReconnectButton> {
        self.events().into_iter().rev().find_map(|e| match e {
            SurfaceEvent::Reconnect(button) => Some(button),
            _ => None,
        })
    }
}

impl PopupSurface for RecordingSurface {
    fn show(&self, view: &RenderedView) {
        self.events
            .lock()
            .unwrap()
            .push(SurfaceEvent::Show(view.clone()));
    }

    fn set_toggle(&self, enabled: bool) {
        self.events.lock().unwrap().push(SurfaceEvent::Toggle(enabled));
    }

    fn set_reconnect_button(&self, button: ReconnectButton) {
        self.events
            .lock()
            .unwrap()
            .push(SurfaceEvent::Reconnect(button));
    }
}

/// A controller wired to fresh fakes.
pub struct Harness {
    pub background: Arc<FakeBackground>,
    pub surface: Arc<RecordingSurface>,
    pub controller: PopupController,
}

impl Harness {
    pub fn new() -> Self {
        let background = FakeBackground::new();
        let surface = RecordingSurface::new();
        let controller = PopupController::new(PanelDeps::new(
            background.clone(),
            surface.clone(),
            Arc::new(NoopNavigator),
            PanelConfig::default(),
        ));
        Self {
            background,
            surface,
            controller,
        }
    }
}

/// A `get_status` reply: `fields` plus `status: "ok"`.
pub fn status_ok(fields: Value) -> Value {
    let mut reply = json!({"status": "ok"});
    if let (Some(reply), Value::Object(fields)) = (reply.as_object_mut(), fields) {
        reply.extend(fields);
    }
    reply
}

/// Connected snapshot with `n` servers of one tool each.
pub fn connected_with_servers(n: usize) -> Value {
    let servers: Vec<Value> = (0..n)
        .map(|i| json!({"name": format!("server-{i}"), "toolCount": 1}))
        .collect();
    status_ok(json!({
        "bridgeEnabled": true,
        "bridge_connected": true,
        "bridge_url": "ws://localhost:54319",
        "mcp_servers": servers,
        "settings": {"autoConnect": true}
    }))
}

/// Let paused time run forward by `ms`.
pub async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
