//! Virtual File System
//!
//! An in-memory tree of named nodes built once from a zip archive's
//! entry list and immutable afterwards. Navigation never touches real
//! storage.

pub mod builder;
pub mod navigator;
pub mod types;

pub use builder::{build_tree, list_entries, load_archive};
pub use navigator::{node_at, resolve, Location};
pub use types::{Node, VfsError};
