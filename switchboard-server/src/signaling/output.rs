use async_trait::async_trait;
use switchboard_core::{ServerEvent, SessionId};

/// Implemented by the transport layer so the coordinator can push
/// events to clients without knowing how they are connected.
///
/// Delivery is best-effort at-most-once: a session mid-teardown simply
/// misses the event, and no implementation may block the caller on a
/// slow peer.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Deliver an event to one session.
    async fn send(&self, session: &SessionId, event: ServerEvent);

    /// Deliver an event to every live session, joined to a room or not.
    async fn broadcast(&self, event: ServerEvent);
}
