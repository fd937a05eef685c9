use std::collections::{HashMap, HashSet};
use switchboard_core::UserId;

/// Room name -> current member identities.
///
/// Rooms are created implicitly on first join and never destroyed; a
/// room everyone has left is just an empty set. Membership is derived
/// purely from join/leave/disconnect events, so duplicates cannot
/// occur.
#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: HashMap<String, HashSet<UserId>>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `user` to `room`. No-op if already present.
    pub fn join(&mut self, room: &str, user: UserId) {
        self.rooms.entry(room.to_string()).or_default().insert(user);
    }

    /// Remove `user` from `room`. No-op if absent.
    pub fn leave(&mut self, room: &str, user: &UserId) {
        if let Some(members) = self.rooms.get_mut(room) {
            members.remove(user);
        }
    }

    /// Strip `user` from every room, reporting the rooms that changed.
    /// Disconnects arrive handle-first, so the caller only learns the
    /// identity at teardown time and cannot name the rooms itself.
    pub fn remove_everywhere(&mut self, user: &UserId) -> Vec<String> {
        let mut affected = Vec::new();
        for (name, members) in &mut self.rooms {
            if members.remove(user) {
                affected.push(name.clone());
            }
        }
        affected
    }

    pub fn members(&self, room: &str) -> impl Iterator<Item = &UserId> {
        self.rooms.get(room).into_iter().flatten()
    }
}
