pub mod agent;
pub mod analyzer;
pub mod evasion;
pub mod firing;
pub mod geometry;
pub mod movement;
pub mod radar;
pub mod session;
pub mod strafer;
pub mod tracker;
pub mod trace;
pub mod wall_smoothing;

pub use agent::*;
pub use session::*;
pub use strafer::{AgentState, StraferAgent};
pub use trace::*;
