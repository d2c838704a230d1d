//! vshell - an emulated UNIX-like shell over a virtual filesystem
//!
//! This library builds an in-memory VFS from a zip archive's entry
//! list, dispatches a small fixed command set against it, and records
//! every command into a structured session log.

pub mod commands;
pub mod emulator;
pub mod session;
pub mod vfs;

pub use emulator::{Dispatch, Emulator, EmulatorOptions};
pub use session::{CommandRecord, SessionRecorder};
pub use vfs::{build_tree, load_archive, Node};
