use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::vfs::resolve;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        // No argument means the root, same as `cd /`.
        let path = ctx.args.first().map(String::as_str).unwrap_or("/");
        match resolve(&ctx.vfs, &ctx.location, path, ctx.rooted_cd) {
            Ok(location) => {
                let output = if location.display.is_empty() {
                    "Changed to root directory".to_string()
                } else {
                    format!("Changed directory to /{}", location.display.join("/"))
                };
                CommandResult::moved(output, location)
            }
            Err(requested) => {
                CommandResult::output(format!("Directory not found: {}", requested))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{build_tree, Location, Node};
    use std::sync::Arc;

    fn ctx(vfs: Arc<Node>, args: Vec<String>, location: Location) -> CommandContext {
        CommandContext {
            args,
            user: "tester".to_string(),
            vfs,
            location,
            history: Vec::new(),
            rooted_cd: false,
        }
    }

    #[tokio::test]
    async fn test_cd_into_child() {
        let vfs = Arc::new(build_tree(["documents/report.txt"]));
        let result = CdCommand
            .execute(ctx(vfs, vec!["documents".to_string()], Location::default()))
            .await;
        assert_eq!(result.output, "Changed directory to /documents");
        let location = result.new_location.unwrap();
        assert_eq!(location.segments, vec!["documents"]);
    }

    #[tokio::test]
    async fn test_cd_missing_child_reports_and_stays() {
        let vfs = Arc::new(build_tree(["documents/"]));
        let result = CdCommand
            .execute(ctx(vfs, vec!["invalid_dir".to_string()], Location::default()))
            .await;
        assert_eq!(result.output, "Directory not found: invalid_dir");
        assert!(result.new_location.is_none());
    }

    #[tokio::test]
    async fn test_cd_without_argument_goes_to_root() {
        let vfs = Arc::new(build_tree(["documents/report.txt"]));
        let here = Location {
            segments: vec!["documents".to_string()],
            display: vec!["documents".to_string()],
        };
        let result = CdCommand.execute(ctx(vfs, Vec::new(), here)).await;
        assert_eq!(result.output, "Changed to root directory");
        assert_eq!(result.new_location.unwrap(), Location::default());
    }

    #[tokio::test]
    async fn test_cd_multi_segment() {
        let vfs = Arc::new(build_tree(["documents/notes/todo.txt"]));
        let result = CdCommand
            .execute(ctx(
                vfs,
                vec!["documents/notes".to_string()],
                Location::default(),
            ))
            .await;
        assert_eq!(result.output, "Changed directory to /documents/notes");
    }
}
