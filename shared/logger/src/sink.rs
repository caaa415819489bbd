//! Destinations for log records.

use crate::error::{LoggingError, Result};
use crate::record::LogRecord;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex, MutexGuard};

/// Something that accepts formatted log records.
///
/// Sinks are shared between cloned loggers and across threads.
pub trait LogSink: Send + Sync {
    /// Accepts one record. Must not block on I/O for long.
    fn write(&self, record: &LogRecord);

    /// Blocks until everything written so far has reached its destination.
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

enum Command {
    Write(LogRecord),
    Flush(Sender<()>),
}

/// Appends records to a file from a dedicated writer thread.
pub struct FileSink {
    sender: Sender<Command>,
    path: PathBuf,
}

impl FileSink {
    /// Opens (or creates) `path` in append mode and spawns the writer thread.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (sender, receiver) = channel();
        std::thread::Builder::new()
            .name("log-writer".to_string())
            .spawn(move || run_writer(file, receiver))?;

        Ok(Self {
            sender,
            path: path.to_path_buf(),
        })
    }

    /// Path of the file being written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn write(&self, record: &LogRecord) {
        // A closed channel means the writer failed; nothing left to report to.
        let _ = self.sender.send(Command::Write(record.clone()));
    }

    fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = channel();
        self.sender
            .send(Command::Flush(ack_tx))
            .map_err(|_| LoggingError::SinkClosed)?;
        ack_rx.recv().map_err(|_| LoggingError::SinkClosed)
    }
}

/// Writer loop; runs until every `FileSink` sender is dropped.
fn run_writer(mut file: File, receiver: Receiver<Command>) {
    for command in receiver {
        match command {
            Command::Write(record) => {
                if let Err(e) = file.write_all(record.format().as_bytes()) {
                    eprintln!("Error writing log: {}", e);
                }
            }
            Command::Flush(ack) => {
                if let Err(e) = file.flush() {
                    eprintln!("Error flushing log: {}", e);
                }
                let _ = ack.send(());
            }
        }
    }
}

/// Keeps records in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Formatted lines of everything recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(LogRecord::format).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &LogRecord) {
        self.lock().push(record.clone());
    }
}
