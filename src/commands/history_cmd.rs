use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        // History is appended after dispatch, so the snapshot here does
        // not include the `history` call currently executing.
        CommandResult::output(ctx.history.join("\n"))
    }
}
