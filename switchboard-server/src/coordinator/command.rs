use serde_json::Value;
use switchboard_core::{SessionId, UserId};

/// Commands flowing from the transport layer (WebSocket handlers) into
/// the coordinator event loop.
#[derive(Debug)]
pub enum CoordinatorCommand {
    /// A session wants to enter `room` under the identity `user`. The
    /// fields arrive unvalidated; empty values are answered with an
    /// `error` event instead of mutating any state.
    Join {
        session: SessionId,
        room: String,
        user: String,
    },

    /// Explicit departure. Empty fields make this a no-op.
    Leave { room: String, user: String },

    /// A point-to-point negotiation message to relay on behalf of
    /// `session`.
    Relay {
        session: SessionId,
        message: RelayMessage,
    },

    /// The session's transport went away. Sent exactly once per socket,
    /// after everything else the socket queued.
    Disconnect { session: SessionId },
}

/// Negotiation messages the router forwards verbatim. The blobs are
/// opaque; only the target identity is interpreted.
#[derive(Debug)]
pub enum RelayMessage {
    Offer {
        offer: Value,
        to: UserId,
        from: UserId,
    },
    Answer {
        answer: Value,
        to: UserId,
    },
    IceCandidate {
        candidate: Value,
        to: UserId,
    },
    CallDeclined { to: UserId },
}
