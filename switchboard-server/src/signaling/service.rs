use crate::coordinator::CoordinatorCommand;
use crate::signaling::EventSink;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use switchboard_core::{ServerEvent, SessionId};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

struct SignalingInner {
    sessions: DashMap<SessionId, mpsc::UnboundedSender<Message>>,
}

/// Session handle -> outbound WebSocket sender. Shared between the
/// connection tasks (which insert and remove their own entry) and the
/// coordinator (which sends through it), hence the DashMap.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
    pub(crate) command_tx: mpsc::Sender<CoordinatorCommand>,
}

impl SignalingService {
    pub fn new(command_tx: mpsc::Sender<CoordinatorCommand>) -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                sessions: DashMap::new(),
            }),
            command_tx,
        }
    }

    pub fn add_session(&self, session: SessionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.sessions.insert(session, tx);
    }

    pub fn remove_session(&self, session: &SessionId) {
        self.inner.sessions.remove(session);
    }

    pub fn send_event(&self, session: &SessionId, event: &ServerEvent) {
        if let Some(tx) = self.inner.sessions.get(session) {
            match serde_json::to_string(event) {
                Ok(json) => {
                    if let Err(e) = tx.send(Message::Text(json.into())) {
                        error!("Failed to send WS message to {session}: {e:?}");
                    }
                }
                Err(e) => error!("Failed to serialize server event: {}", e),
            }
        } else {
            warn!("Attempted to send event to disconnected session {session}");
        }
    }
}

#[async_trait]
impl EventSink for SignalingService {
    async fn send(&self, session: &SessionId, event: ServerEvent) {
        self.send_event(session, &event);
    }

    async fn broadcast(&self, event: ServerEvent) {
        let json = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize server event: {}", e);
                return;
            }
        };

        for entry in self.inner.sessions.iter() {
            if entry.value().send(Message::Text(json.clone().into())).is_err() {
                debug!("Skipping broadcast to closing session {}", entry.key());
            }
        }
    }
}
