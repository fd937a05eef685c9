pub mod config;
pub mod coordinator;
pub mod error;
pub mod server;
pub mod signaling;

pub use config::ServerConfig;
pub use coordinator::{
    ConnectionRegistry, Coordinator, CoordinatorCommand, NegotiationRouter, PresenceNotifier,
    RelayMessage, RoomStore,
};
pub use error::ServerError;
pub use server::SignalingServer;
pub use signaling::{EventSink, SignalingService};
