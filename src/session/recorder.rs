//! Session Recorder
//!
//! Accumulates one record per executed command and writes the whole
//! session out once at shutdown. The destination is created up front so
//! an unwritable log path aborts startup instead of losing a session at
//! exit.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

/// One logged command. Field names match the original session log
/// schema (`user`/`time`/`input`/`output` under a `session` root).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandRecord {
    pub user: String,
    pub time: String,
    pub input: String,
    pub output: String,
}

#[derive(Serialize)]
struct SessionDocument<'a> {
    session: &'a [CommandRecord],
}

pub struct SessionRecorder {
    destination: PathBuf,
    records: Vec<CommandRecord>,
    persisted: bool,
}

impl SessionRecorder {
    /// Create a recorder, truncating (and thereby validating) the
    /// destination file.
    pub fn create(destination: &Path) -> std::io::Result<Self> {
        File::create(destination)?;
        Ok(Self {
            destination: destination.to_path_buf(),
            records: Vec::new(),
            persisted: false,
        })
    }

    pub fn record(&mut self, user: &str, time: &str, input: &str, output: &str) {
        self.records.push(CommandRecord {
            user: user.to_string(),
            time: time.to_string(),
            input: input.to_string(),
            output: output.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    /// Write the session document. A second call (`exit` raced with an
    /// interrupt) is a no-op; the write itself overwrites, never appends.
    pub fn persist(&mut self) -> std::io::Result<()> {
        if self.persisted {
            return Ok(());
        }
        let document = SessionDocument {
            session: &self.records,
        };
        let body = serde_json::to_string_pretty(&document)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = File::create(&self.destination)?;
        file.write_all(body.as_bytes())?;
        self.persisted = true;
        debug!(records = self.records.len(), destination = %self.destination.display(), "session log persisted");
        Ok(())
    }
}
