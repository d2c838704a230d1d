use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct WhoCommand;

#[async_trait]
impl Command for WhoCommand {
    fn name(&self) -> &'static str {
        "who"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::output(ctx.user)
    }
}
