// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory capture sink.
//!
//! [`MemoryWriter`] captures records rather than rendering them, which makes
//! it the natural end of a pipeline under test: compose decorators in front
//! of one, log, then assert on exactly which records arrived and in what
//! shape. It is equally usable at runtime for programmatically examining
//! log output.

use crate::record::LogRecord;
use crate::writer::LogWriter;
use std::sync::Mutex;

/// A terminal sink that stores every record it receives.
///
/// Thread-safe; share it with `Arc` to keep a handle for inspection after
/// moving it into a decorator chain:
///
/// ```
/// use logchain::{LogLevel, LogRecord, LogWriter, MemoryWriter};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemoryWriter::new());
/// let writer = sink.clone();
///
/// writer.log(&LogRecord::new("ready", LogLevel::Info, None, file!(), line!()));
/// assert_eq!(sink.records().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryWriter {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// A snapshot of every record received so far, in arrival order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Takes the captured records, leaving the buffer empty.
    pub fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// The display text of every captured record, one entry per record.
    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|record| record.formatted.clone())
            .collect()
    }
}

impl LogWriter for MemoryWriter {
    fn log(&self, record: &LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record.clone());
    }
}
