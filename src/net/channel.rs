//! Realtime channel client scoped to a single project.
//!
//! One connection per active project: the project page spawns the client on
//! mount, publishes through the returned sender, and deregisters by clearing
//! the active project id on unmount. The loop observes that and winds down
//! instead of reconnecting. Delivery is at-most-once, best effort.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

#[cfg(feature = "hydrate")]
use crate::net::types::{ChannelEvent, MESSAGE_TOPIC, parse_project_message};
#[cfg(feature = "hydrate")]
use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use crate::state::project::{ConnectionStatus, ProjectState};
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;
#[cfg(feature = "hydrate")]
use leptos::prelude::WithUntracked;

/// Derive the channel endpoint from the API base location.
///
/// `http(s)` schemes map to `ws(s)`; the project id and, when present, the
/// bearer credential travel as query parameters.
#[must_use]
pub fn channel_url(base: &str, project_id: &str, token: Option<&str>) -> String {
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_owned()
    };

    match token {
        Some(token) => format!("{ws_base}/socket?project_id={project_id}&token={token}"),
        None => format!("{ws_base}/socket?project_id={project_id}"),
    }
}

/// Spawn the channel client lifecycle as a local async task.
///
/// Connects to the server, dispatches inbound message events into chat
/// state, and reconnects on disconnect with exponential backoff while the
/// project is still active.
#[cfg(feature = "hydrate")]
pub fn spawn_channel(
    project_id: String,
    project: leptos::prelude::RwSignal<ProjectState>,
    chat: leptos::prelude::RwSignal<ChatState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(channel_loop(project_id, project, chat, rx));

    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn channel_loop(
    project_id: String,
    project: leptos::prelude::RwSignal<ProjectState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        if !is_active(project, &project_id) {
            break;
        }

        project.update(|p| p.connection_status = ConnectionStatus::Connecting);

        let url = channel_url(
            &crate::net::api::api_base(),
            &project_id,
            crate::util::storage::token().as_deref(),
        );

        match connect_and_run(&url, &project_id, project, chat, &rx).await {
            Ok(()) => {
                leptos::logging::log!("channel disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("channel error: {e}");
            }
        }

        project.update(|p| p.connection_status = ConnectionStatus::Disconnected);

        if !is_active(project, &project_id) {
            break;
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Whether the owning screen still has this project mounted.
#[cfg(feature = "hydrate")]
fn is_active(project: leptos::prelude::RwSignal<ProjectState>, project_id: &str) -> bool {
    project.with_untracked(|p| p.project_id.as_deref() == Some(project_id))
}

/// Connect to the channel and process events until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    project_id: &str,
    project: leptos::prelude::RwSignal<ProjectState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    project.update(|p| p.connection_status = ConnectionStatus::Connected);

    // Forward outgoing publishes from our channel to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: process inbound events.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(event) = serde_json::from_str::<ChannelEvent>(&text) {
                        dispatch_event(&event, project_id, project, chat);
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("channel recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Dispatch an inbound event to chat state.
///
/// Only the message topic is handled; anything else is ignored. Events are
/// appended unconditionally, with no deduplication and no ordering
/// correction.
#[cfg(feature = "hydrate")]
fn dispatch_event(
    event: &ChannelEvent,
    project_id: &str,
    project: leptos::prelude::RwSignal<ProjectState>,
    chat: leptos::prelude::RwSignal<ChatState>,
) {
    if event.event != MESSAGE_TOPIC {
        return;
    }

    // The handler is deregistered once the screen has moved off the project.
    if !is_active(project, project_id) {
        return;
    }

    if let Some(msg) = parse_project_message(&event.data) {
        chat.update(|c| c.push_remote(msg));
    } else {
        leptos::logging::warn!("unparseable {MESSAGE_TOPIC} payload: {}", event.data);
    }
}
