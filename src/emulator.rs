//! Shell Emulator
//!
//! Main entry point for the emulated shell session. Ties together the
//! VFS, the command registry, session state, and the session recorder,
//! and owns the dispatch rules plus the per-command side-effect order.

use std::sync::Arc;

use tracing::debug;

use crate::commands::{default_registry, CommandContext, CommandRegistry};
use crate::session::{SessionRecorder, SessionState};
use crate::vfs::Node;

/// Options for creating an emulator session.
pub struct EmulatorOptions {
    /// Authenticated user name, fixed for the process lifetime.
    pub user: String,
    /// Anchor leading-slash `cd` targets at the root instead of the
    /// current node (off by default; see `--rooted-cd`).
    pub rooted_cd: bool,
}

/// Outcome of processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Command produced this output (possibly empty) and the session
    /// continues.
    Output(String),
    /// `exit` was entered; the session log has been persisted and the
    /// caller should terminate.
    Exit,
}

/// The emulated shell session.
pub struct Emulator {
    vfs: Arc<Node>,
    state: SessionState,
    registry: CommandRegistry,
    recorder: SessionRecorder,
    rooted_cd: bool,
}

impl Emulator {
    pub fn new(vfs: Node, recorder: SessionRecorder, options: EmulatorOptions) -> Self {
        Self {
            vfs: Arc::new(vfs),
            state: SessionState::new(options.user),
            registry: default_registry(),
            recorder,
            rooted_cd: options.rooted_cd,
        }
    }

    /// Process one raw input line: dispatch, then (in order) append to
    /// history, append a command record, and hand the output back for
    /// display.
    ///
    /// `exit` is the one named special case: it persists the log and
    /// returns before any side effect, so it never appears in history
    /// or in the session record.
    pub async fn process(&mut self, input: &str) -> std::io::Result<Dispatch> {
        if input == "exit" {
            self.recorder.persist()?;
            return Ok(Dispatch::Exit);
        }

        let output = self.dispatch(input).await;

        self.state.history.push(input.to_string());
        self.recorder.record(
            &self.state.user,
            &crate::commands::date_cmd::now_stamp(),
            input,
            &output,
        );
        Ok(Dispatch::Output(output))
    }

    /// Map a raw line to a handler and run it. Soft failures (unknown
    /// command, directory not found) come back as ordinary output text.
    async fn dispatch(&mut self, input: &str) -> String {
        let (name, args) = match route(input) {
            Some(routed) => routed,
            None => return "Unknown command".to_string(),
        };
        debug!(command = name, "dispatching");

        let Some(command) = self.registry.get(name) else {
            return "Unknown command".to_string();
        };
        let ctx = CommandContext {
            args,
            user: self.state.user.clone(),
            vfs: Arc::clone(&self.vfs),
            location: self.state.location.clone(),
            history: self.state.history.clone(),
            rooted_cd: self.rooted_cd,
        };
        let result = command.execute(ctx).await;
        if let Some(location) = result.new_location {
            self.state.location = location;
        }
        result.output
    }

    /// Persist the session log. Safe to call on every termination path;
    /// the recorder ignores repeats.
    pub fn shutdown(&mut self) -> std::io::Result<()> {
        self.recorder.persist()
    }

    /// Interactive prompt line, reflecting the last successful `cd`.
    pub fn prompt(&self) -> String {
        format!(
            "{}@emulator:~{}$ ",
            self.state.user,
            self.state.location.display_path()
        )
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn recorder(&self) -> &SessionRecorder {
        &self.recorder
    }
}

/// Keyword matching for the fixed command set: `ls` and `cd` match on
/// prefix, the rest only exactly. `cd`'s argument is everything after
/// the first whitespace run; absent, it defaults to `/`.
fn route(input: &str) -> Option<(&'static str, Vec<String>)> {
    if input.starts_with("ls") {
        return Some(("ls", Vec::new()));
    }
    if input.starts_with("cd") {
        let arg = match input.split_once(char::is_whitespace) {
            Some((_, rest)) if !rest.trim_start().is_empty() => rest.trim_start().to_string(),
            _ => "/".to_string(),
        };
        return Some(("cd", vec![arg]));
    }
    match input {
        "who" => Some(("who", Vec::new())),
        "history" => Some(("history", Vec::new())),
        "date" => Some(("date", Vec::new())),
        _ => None,
    }
}
