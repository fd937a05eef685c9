mod command;
mod coordinator;
mod presence;
mod registry;
mod rooms;
mod router;

pub use command::*;
pub use coordinator::*;
pub use presence::*;
pub use registry::*;
pub use rooms::*;
pub use router::*;
