use async_trait::async_trait;
use std::sync::Arc;
use switchboard_core::{ServerEvent, SessionId};
use switchboard_server::EventSink;
use tokio::sync::{mpsc, Mutex};

/// One captured delivery: either directed at a single session or
/// broadcast to every live session.
#[derive(Debug, Clone)]
pub enum Delivery {
    Direct {
        session: SessionId,
        event: ServerEvent,
    },
    Broadcast {
        event: ServerEvent,
    },
}

/// Mock EventSink that captures all outgoing traffic, in order.
#[derive(Clone)]
pub struct MockEventSink {
    /// Channel mirroring every captured delivery.
    tx: mpsc::UnboundedSender<Delivery>,
    /// All captured deliveries (for verification).
    deliveries: Arc<Mutex<Vec<Delivery>>>,
}

impl MockEventSink {
    /// Create a new MockEventSink and its receiver channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Delivery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = Self {
            tx,
            deliveries: Arc::new(Mutex::new(Vec::new())),
        };
        (sink, rx)
    }

    /// Everything captured so far, in delivery order.
    pub async fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().await.clone()
    }

    /// Events delivered directly to `session`, in order.
    pub async fn events_for(&self, session: &SessionId) -> Vec<ServerEvent> {
        self.deliveries
            .lock()
            .await
            .iter()
            .filter_map(|d| match d {
                Delivery::Direct {
                    session: target,
                    event,
                } if target == session => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    /// Events broadcast to all sessions, in order.
    pub async fn broadcasts(&self) -> Vec<ServerEvent> {
        self.deliveries
            .lock()
            .await
            .iter()
            .filter_map(|d| match d {
                Delivery::Broadcast { event } => Some(event.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl EventSink for MockEventSink {
    async fn send(&self, session: &SessionId, event: ServerEvent) {
        tracing::debug!("[MockSink] send to {session}: {event:?}");

        let delivery = Delivery::Direct {
            session: session.clone(),
            event,
        };

        self.deliveries.lock().await.push(delivery.clone());
        let _ = self.tx.send(delivery);
    }

    async fn broadcast(&self, event: ServerEvent) {
        tracing::debug!("[MockSink] broadcast: {event:?}");

        let delivery = Delivery::Broadcast { event };

        self.deliveries.lock().await.push(delivery.clone());
        let _ = self.tx.send(delivery);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sink_captures_in_order() {
        let (sink, mut rx) = MockEventSink::new();
        let session = SessionId::new();

        sink.send(
            &session,
            ServerEvent::Error {
                message: "nope".to_string(),
            },
        )
        .await;
        sink.broadcast(ServerEvent::ConnectedUsers { users: vec![] })
            .await;

        assert!(matches!(rx.recv().await, Some(Delivery::Direct { .. })));
        assert!(matches!(rx.recv().await, Some(Delivery::Broadcast { .. })));

        let direct = sink.events_for(&session).await;
        assert_eq!(direct.len(), 1);
        assert_eq!(sink.broadcasts().await.len(), 1);
    }
}
