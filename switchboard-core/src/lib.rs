pub mod model;

pub use model::{ClientEvent, Participant, ServerEvent, SessionId, UserId};
