//! Session Module
//!
//! Per-session mutable state and the structured command log.

pub mod recorder;
pub mod state;

pub use recorder::{CommandRecord, SessionRecorder};
pub use state::SessionState;
