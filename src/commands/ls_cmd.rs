use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::vfs::node_at;

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        // The location invariant guarantees the walk succeeds; a file
        // node simply has no children and reads as empty.
        let names = node_at(&ctx.vfs, &ctx.location.segments)
            .map(|node| node.child_names())
            .unwrap_or_default();
        if names.is_empty() {
            CommandResult::output("Directory is empty.".to_string())
        } else {
            CommandResult::output(names.join("\n"))
        }
    }
}
