// src/commands/mod.rs
pub mod cd_cmd;
pub mod date_cmd;
pub mod history_cmd;
pub mod ls_cmd;
pub mod registry;
pub mod types;
pub mod who_cmd;

pub use registry::{default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
