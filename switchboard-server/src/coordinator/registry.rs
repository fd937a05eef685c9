use std::collections::HashMap;
use switchboard_core::{SessionId, UserId};

/// Single source of truth for "is this identity currently reachable".
///
/// Both directions of the identity/session mapping are kept in lockstep
/// so handle-keyed removal on disconnect stays O(1) instead of scanning
/// every entry.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    by_user: HashMap<UserId, SessionId>,
    by_session: HashMap<SessionId, UserId>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `user` as reachable on `session`. Last-registered-wins:
    /// any prior session for the identity and any prior identity for
    /// the session are displaced, keeping the mapping 1:1 in both
    /// directions.
    pub fn register(&mut self, user: UserId, session: SessionId) {
        if let Some(old_session) = self.by_user.remove(&user) {
            self.by_session.remove(&old_session);
        }
        if let Some(old_user) = self.by_session.remove(&session) {
            self.by_user.remove(&old_user);
        }
        self.by_user.insert(user.clone(), session.clone());
        self.by_session.insert(session, user);
    }

    /// Identity-keyed removal (explicit leave path).
    pub fn unregister(&mut self, user: &UserId) -> Option<SessionId> {
        let session = self.by_user.remove(user)?;
        self.by_session.remove(&session);
        Some(session)
    }

    /// Handle-keyed removal (transport disconnect path). Returns the
    /// identity that owned the handle, or `None` if the handle was
    /// never registered or was already cleaned up.
    pub fn unregister_by_handle(&mut self, session: &SessionId) -> Option<UserId> {
        let user = self.by_session.remove(session)?;
        self.by_user.remove(&user);
        Some(user)
    }

    pub fn lookup(&self, user: &UserId) -> Option<&SessionId> {
        self.by_user.get(user)
    }

    /// All registered `(identity, session)` pairs, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&UserId, &SessionId)> {
        self.by_user.iter()
    }

    pub fn len(&self) -> usize {
        self.by_user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }
}
