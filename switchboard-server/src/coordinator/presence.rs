use crate::coordinator::registry::ConnectionRegistry;
use crate::coordinator::rooms::RoomStore;
use crate::signaling::EventSink;
use std::sync::Arc;
use switchboard_core::{Participant, ServerEvent, UserId};

/// Computes roster / connected-user snapshots and pushes them through
/// the [`EventSink`]. Every method is called from the coordinator event
/// loop strictly after the mutation it describes, so a snapshot can
/// never be stale by one event.
pub struct PresenceNotifier {
    events: Arc<dyn EventSink>,
}

impl PresenceNotifier {
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self { events }
    }

    /// Ordered snapshot of the identities present in `room` that still
    /// hold a live registry entry. A member whose registration was
    /// displaced or torn down is filtered out rather than broadcast
    /// stale.
    pub fn roster(
        &self,
        registry: &ConnectionRegistry,
        rooms: &RoomStore,
        room: &str,
    ) -> Vec<Participant> {
        let mut users: Vec<Participant> = rooms
            .members(room)
            .filter_map(|user| {
                registry.lookup(user).map(|session| Participant {
                    user_id: user.clone(),
                    session_id: session.clone(),
                })
            })
            .collect();
        users.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        users
    }

    /// Tell every *other* member of `room` that `joiner` arrived.
    pub async fn notify_join(
        &self,
        registry: &ConnectionRegistry,
        rooms: &RoomStore,
        room: &str,
        joiner: &UserId,
    ) {
        let Some(joiner_session) = registry.lookup(joiner) else {
            return;
        };

        for user in rooms.members(room) {
            if user == joiner {
                continue;
            }
            let Some(session) = registry.lookup(user) else {
                continue;
            };
            self.events
                .send(
                    session,
                    ServerEvent::NewUserJoined {
                        user_id: joiner.clone(),
                        session_id: joiner_session.clone(),
                    },
                )
                .await;
        }
    }

    /// Send the current roster of `room` to every session joined to it.
    pub async fn broadcast_room_roster(
        &self,
        registry: &ConnectionRegistry,
        rooms: &RoomStore,
        room: &str,
    ) {
        let users = self.roster(registry, rooms, room);
        for participant in &users {
            self.events
                .send(
                    &participant.session_id,
                    ServerEvent::RoomUsers {
                        users: users.clone(),
                    },
                )
                .await;
        }
    }

    /// Send the process-wide identity list to every live session,
    /// whether or not it has joined a room.
    pub async fn broadcast_connected_users(&self, registry: &ConnectionRegistry) {
        let mut users: Vec<Participant> = registry
            .iter()
            .map(|(user, session)| Participant {
                user_id: user.clone(),
                session_id: session.clone(),
            })
            .collect();
        users.sort_by(|a, b| a.user_id.cmp(&b.user_id));

        self.events
            .broadcast(ServerEvent::ConnectedUsers { users })
            .await;
    }

    /// Announce a departure process-wide so anyone mid-call with `user`
    /// can reset its call state.
    pub async fn notify_departure(&self, user: &UserId) {
        self.events
            .broadcast(ServerEvent::UserDisconnected {
                user_id: user.clone(),
            })
            .await;
    }
}
