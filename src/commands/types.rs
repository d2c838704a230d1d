// src/commands/types.rs
use async_trait::async_trait;
use std::sync::Arc;

use crate::vfs::{Location, Node};

/// Execution context handed to a command handler. Owns snapshots of the
/// session state; the only mutation a handler can request is a location
/// change, carried back on the result.
pub struct CommandContext {
    pub args: Vec<String>,
    pub user: String,
    pub vfs: Arc<Node>,
    pub location: Location,
    pub history: Vec<String>,
    /// Anchor leading-slash paths at the root instead of the current node.
    pub rooted_cd: bool,
}

/// What a command produced.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub output: String,
    pub new_location: Option<Location>,
}

impl CommandResult {
    pub fn output(output: String) -> Self {
        Self {
            output,
            new_location: None,
        }
    }

    pub fn moved(output: String, location: Location) -> Self {
        Self {
            output,
            new_location: Some(location),
        }
    }
}

/// A built-in command.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}
