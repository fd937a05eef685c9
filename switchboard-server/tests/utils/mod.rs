pub mod mock_sink;

pub use helpers::*;
pub use mock_sink::*;
