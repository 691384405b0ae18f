// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fan-out decorator: forwards one record to every child writer.

use crate::console_writer::diagnostic;
use crate::record::LogRecord;
use crate::writer::LogWriter;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A [`LogWriter`] that forwards each record to an ordered list of child
/// writers.
///
/// Every child receives a reference to the *same* record; branches that want
/// their own filtering or formatting attach their own decorators, which
/// derive copies rather than mutating the shared record, so siblings never
/// affect each other.
///
/// ```no_run
/// use logchain::{ConsoleWriter, FileWriter, ForkWriter, LogLevel, LogWriterExt, SimpleFormat};
///
/// let writer = ForkWriter::new()
///     .with(FileWriter::new("app.log").filter_level(LogLevel::Warning))
///     .with(ConsoleWriter::new().format(SimpleFormat));
/// ```
#[derive(Debug, Default)]
pub struct ForkWriter {
    writers: Vec<Box<dyn LogWriter>>,
}

impl ForkWriter {
    pub fn new() -> Self {
        Self {
            writers: Vec::new(),
        }
    }

    /// Appends a branch, builder style.
    #[must_use]
    pub fn with(mut self, writer: impl LogWriter + 'static) -> Self {
        self.writers.push(Box::new(writer));
        self
    }

    /// Appends an already-boxed branch.
    pub fn push(&mut self, writer: Box<dyn LogWriter>) {
        self.writers.push(writer);
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl From<Vec<Box<dyn LogWriter>>> for ForkWriter {
    fn from(writers: Vec<Box<dyn LogWriter>>) -> Self {
        Self { writers }
    }
}

impl LogWriter for ForkWriter {
    fn log(&self, record: &LogRecord) {
        for writer in &self.writers {
            // A misbehaving branch must not starve its siblings.
            if catch_unwind(AssertUnwindSafe(|| writer.log(record))).is_err() {
                diagnostic(&format!("log writer {writer:?} panicked; continuing fan-out"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;
    use crate::memory_writer::MemoryWriter;
    use std::sync::Arc;

    #[test]
    fn every_child_receives_the_record_once() {
        let children: Vec<Arc<MemoryWriter>> =
            (0..3).map(|_| Arc::new(MemoryWriter::new())).collect();
        let mut fork = ForkWriter::new();
        for child in &children {
            fork.push(Box::new(child.clone()));
        }
        let record = LogRecord::new("Message", LogLevel::Info, None, file!(), line!());

        fork.log(&record);

        for child in &children {
            assert_eq!(child.records(), vec![record.clone()]);
        }
    }

    #[test]
    fn children_are_invoked_for_every_level() {
        for level in LogLevel::ALL {
            let first = Arc::new(MemoryWriter::new());
            let second = Arc::new(MemoryWriter::new());
            let fork = ForkWriter::new().with(first.clone()).with(second.clone());
            let record = LogRecord::new("Message", level, None, file!(), line!());

            fork.log(&record);

            assert_eq!(first.records(), vec![record.clone()]);
            assert_eq!(second.records(), vec![record]);
        }
    }

    #[derive(Debug)]
    struct PanickingWriter;

    impl LogWriter for PanickingWriter {
        fn log(&self, _record: &LogRecord) {
            panic!("sink failed");
        }
    }

    #[test]
    fn panicking_child_does_not_starve_siblings() {
        let survivor = Arc::new(MemoryWriter::new());
        let fork = ForkWriter::new()
            .with(PanickingWriter)
            .with(survivor.clone());
        let record = LogRecord::new("Message", LogLevel::Error, None, file!(), line!());

        fork.log(&record);

        assert_eq!(survivor.records(), vec![record]);
    }
}
