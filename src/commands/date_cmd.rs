use async_trait::async_trait;
use chrono::Local;

use crate::commands::{Command, CommandContext, CommandResult};

/// Format shared with the session recorder's timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current wall-clock time, `YYYY-MM-DD HH:MM:SS`.
pub fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub struct DateCommand;

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::output(now_stamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_stamp_matches_fixed_format() {
        let stamp = now_stamp();
        assert!(NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_stamp_date_portion_is_today() {
        let stamp = now_stamp();
        let today = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(&stamp[..10], today);
    }
}
