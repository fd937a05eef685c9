use crate::coordinator::command::RelayMessage;
use crate::coordinator::registry::ConnectionRegistry;
use crate::signaling::EventSink;
use std::sync::Arc;
use switchboard_core::{ServerEvent, SessionId};
use tracing::debug;

/// Pure pass-through relay with target resolution. Never stores or
/// inspects negotiation blobs; its only state is the sink it forwards
/// into.
pub struct NegotiationRouter {
    events: Arc<dyn EventSink>,
}

impl NegotiationRouter {
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self { events }
    }

    /// Forward `message` to its declared target, consulting the
    /// registry for the target's current session.
    ///
    /// Only an unreachable offer is reported back to the sender. At the
    /// later negotiation stages the caller already believes the callee
    /// is online, so a stale-target error is not actionable and those
    /// messages are dropped silently.
    pub async fn route(
        &self,
        registry: &ConnectionRegistry,
        sender: &SessionId,
        message: RelayMessage,
    ) {
        match message {
            RelayMessage::Offer { offer, to, from } => match registry.lookup(&to) {
                Some(target) => {
                    self.events
                        .send(
                            target,
                            ServerEvent::Offer {
                                offer,
                                from,
                                from_session_id: sender.clone(),
                            },
                        )
                        .await;
                }
                None => {
                    self.events
                        .send(
                            sender,
                            ServerEvent::CallFailed {
                                reason: format!("User {to} is not online."),
                            },
                        )
                        .await;
                }
            },

            RelayMessage::Answer { answer, to } => match registry.lookup(&to) {
                Some(target) => {
                    self.events
                        .send(target, ServerEvent::Answer { answer })
                        .await;
                }
                None => debug!(user = %to, "dropping answer for unreachable target"),
            },

            RelayMessage::IceCandidate { candidate, to } => match registry.lookup(&to) {
                Some(target) => {
                    self.events
                        .send(target, ServerEvent::IceCandidate { candidate })
                        .await;
                }
                None => debug!(user = %to, "dropping ICE candidate for unreachable target"),
            },

            RelayMessage::CallDeclined { to } => match registry.lookup(&to) {
                Some(target) => {
                    self.events.send(target, ServerEvent::CallDeclined).await;
                }
                None => debug!(user = %to, "dropping decline for unreachable target"),
            },
        }
    }
}
