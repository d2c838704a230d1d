//! Session State
//!
//! The mutable per-session value: who is logged in, where the session
//! sits in the VFS tree, and every raw line entered so far. Owned by
//! the emulator; command handlers only ever see snapshots.

use crate::vfs::Location;

#[derive(Debug, Clone)]
pub struct SessionState {
    pub user: String,
    pub location: Location,
    /// Raw input lines, append-only, in the order they were processed.
    pub history: Vec<String>,
}

impl SessionState {
    pub fn new(user: String) -> Self {
        Self {
            user,
            location: Location::default(),
            history: Vec::new(),
        }
    }
}
