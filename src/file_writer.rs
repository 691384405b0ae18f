// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-append terminal sink.

use crate::console_writer::diagnostic;
use crate::record::LogRecord;
use crate::writer::LogWriter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A terminal sink that appends each record to a file.
///
/// Every call opens the file in append mode (creating it if absent), writes
/// the record's display text followed by the line terminator, and closes the
/// file before returning; no handle is held between calls. Simplicity over
/// throughput: every call pays the open/close cost, which is fine at the
/// light-duty volumes this pipeline is meant for. The file is never rotated
/// or truncated.
///
/// On I/O failure the error is swallowed with a best-effort console
/// diagnostic; the log call returns normally.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    // Concurrent callers take turns so appends never interleave.
    guard: Mutex<()>,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let _guard = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n\r")?;
        Ok(())
    }
}

impl LogWriter for FileWriter {
    fn log(&self, record: &LogRecord) {
        if let Err(error) = self.append(&record.formatted) {
            diagnostic(&format!(
                "failed to append log record to {}: {error}",
                self.path.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;

    fn record(message: &str) -> LogRecord {
        LogRecord::new(message, LogLevel::Info, None, file!(), line!())
    }

    #[test]
    fn creates_file_and_appends_with_terminator() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        let writer = FileWriter::new(&path);

        writer.log(&record("first"));
        writer.log(&record("second"));

        let contents = std::fs::read_to_string(&path).expect("log file exists");
        assert_eq!(contents, "first\n\rsecond\n\r");
    }

    #[test]
    fn appends_formatted_not_message() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        let writer = FileWriter::new(&path);

        writer.log(&record("raw").with_formatted("display text"));

        let contents = std::fs::read_to_string(&path).expect("log file exists");
        assert_eq!(contents, "display text\n\r");
    }

    #[test]
    fn unwritable_path_does_not_panic() {
        let dir = tempfile::tempdir().expect("tempdir");
        // a directory cannot be opened for appending
        let writer = FileWriter::new(dir.path());

        writer.log(&record("dropped"));
    }

    #[test]
    fn concurrent_appends_do_not_interleave() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        let writer = Arc::new(FileWriter::new(&path));

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let writer = writer.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        writer.log(&LogRecord::new(
                            format!("worker {worker} line {i}"),
                            LogLevel::Info,
                            None,
                            file!(),
                            line!(),
                        ));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        let contents = std::fs::read_to_string(&path).expect("log file exists");
        let lines: Vec<&str> = contents.split("\n\r").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 100);
        for line in lines {
            assert!(line.starts_with("worker "), "interleaved line: {line:?}");
        }
    }
}
