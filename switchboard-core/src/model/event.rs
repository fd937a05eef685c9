use crate::model::participant::Participant;
use crate::model::session::SessionId;
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Wire frames are `{"type": "...", "data": {...}}` with kebab-case event
// names and camelCase payload keys, matching what the browser client
// sends and expects. Negotiation blobs (SDP, ICE candidates) are carried
// as raw JSON and never inspected.

/// Everything a client may send over its socket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Join a room under a chosen identity. Fields default to empty so a
    /// frame with missing keys still parses and can be rejected with an
    /// `error` event instead of a parse failure.
    Join {
        #[serde(default)]
        room: String,
        #[serde(default, rename = "userId")]
        user_id: String,
    },
    Leave {
        #[serde(default)]
        room: String,
        #[serde(default, rename = "userId")]
        user_id: String,
    },
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
    CallDeclined {
        to: UserId,
    },
}

/// Everything the coordinator may send to a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Sent to every *other* member of a room when someone joins it.
    NewUserJoined {
        #[serde(rename = "userId")]
        user_id: UserId,
        #[serde(rename = "socketId")]
        session_id: SessionId,
    },
    RoomUsers {
        users: Vec<Participant>,
    },
    ConnectedUsers {
        users: Vec<Participant>,
    },
    /// A relayed offer carries the caller's identity and raw session id
    /// so the callee's reply path is deterministic before any state of
    /// its own exists.
    Offer {
        offer: Value,
        from: UserId,
        #[serde(rename = "fromSocketId")]
        from_session_id: SessionId,
    },
    Answer {
        answer: Value,
    },
    IceCandidate {
        candidate: Value,
    },
    CallDeclined,
    CallFailed {
        reason: String,
    },
    UserDisconnected {
        #[serde(rename = "userId")]
        user_id: UserId,
    },
    Error {
        message: String,
    },
}
