use crate::coordinator::command::CoordinatorCommand;
use crate::coordinator::presence::PresenceNotifier;
use crate::coordinator::registry::ConnectionRegistry;
use crate::coordinator::rooms::RoomStore;
use crate::coordinator::router::NegotiationRouter;
use crate::signaling::EventSink;
use std::sync::Arc;
use switchboard_core::{ServerEvent, SessionId, UserId};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The connection lifecycle handler: one task that exclusively owns the
/// registry and room store and drains commands from the transport
/// layer.
///
/// Processing each command to completion before taking the next is what
/// makes every mutation-plus-broadcast-computation one atomic unit; the
/// maps need no locks because nothing else can reach them. Actual
/// socket writes happen behind the [`EventSink`], so a slow peer never
/// stalls the loop.
pub struct Coordinator {
    registry: ConnectionRegistry,
    rooms: RoomStore,
    presence: PresenceNotifier,
    router: NegotiationRouter,
    events: Arc<dyn EventSink>,
    command_rx: mpsc::Receiver<CoordinatorCommand>,
}

impl Coordinator {
    pub fn new(
        command_rx: mpsc::Receiver<CoordinatorCommand>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            rooms: RoomStore::new(),
            presence: PresenceNotifier::new(events.clone()),
            router: NegotiationRouter::new(events.clone()),
            events,
            command_rx,
        }
    }

    pub async fn run(mut self) {
        info!("Coordinator event loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Coordinator event loop finished");
    }

    async fn handle_command(&mut self, cmd: CoordinatorCommand) {
        match cmd {
            CoordinatorCommand::Join {
                session,
                room,
                user,
            } => self.handle_join(session, room, user).await,

            CoordinatorCommand::Leave { room, user } => self.handle_leave(room, user).await,

            CoordinatorCommand::Relay { session, message } => {
                self.router.route(&self.registry, &session, message).await;
            }

            CoordinatorCommand::Disconnect { session } => self.handle_disconnect(session).await,
        }
    }

    async fn handle_join(&mut self, session: SessionId, room: String, user: String) {
        if room.is_empty() || user.is_empty() {
            self.events
                .send(
                    &session,
                    ServerEvent::Error {
                        message: "Invalid room or userId".to_string(),
                    },
                )
                .await;
            return;
        }

        let user = UserId::from(user);
        info!(%user, %session, %room, "join");

        self.registry.register(user.clone(), session);
        self.rooms.join(&room, user.clone());

        self.presence
            .notify_join(&self.registry, &self.rooms, &room, &user)
            .await;
        self.presence
            .broadcast_room_roster(&self.registry, &self.rooms, &room)
            .await;
        self.presence.broadcast_connected_users(&self.registry).await;
    }

    async fn handle_leave(&mut self, room: String, user: String) {
        if room.is_empty() || user.is_empty() {
            return;
        }

        let user = UserId::from(user);
        info!(%user, %room, "leave");

        self.rooms.leave(&room, &user);
        self.registry.unregister(&user);

        self.presence
            .broadcast_room_roster(&self.registry, &self.rooms, &room)
            .await;
        self.presence.broadcast_connected_users(&self.registry).await;
    }

    async fn handle_disconnect(&mut self, session: SessionId) {
        let Some(user) = self.registry.unregister_by_handle(&session) else {
            // Disconnect raced ahead of join, or arrived after an
            // explicit leave already cleaned up. Harmless either way.
            debug!(%session, "disconnect for unregistered session");
            return;
        };

        info!(%user, %session, "disconnected");

        let affected = self.rooms.remove_everywhere(&user);

        self.presence.notify_departure(&user).await;
        for room in &affected {
            self.presence
                .broadcast_room_roster(&self.registry, &self.rooms, room)
                .await;
        }
        self.presence.broadcast_connected_users(&self.registry).await;
    }
}
