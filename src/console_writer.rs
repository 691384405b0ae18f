// SPDX-License-Identifier: MIT OR Apache-2.0

//! Console terminal sink.

use crate::record::LogRecord;
use crate::writer::LogWriter;
use std::fmt;

type PrintFn = Box<dyn Fn(&str) + Send + Sync>;

/// A terminal sink that writes each record's display text to stdout, one
/// line per call.
///
/// No buffering beyond what the underlying console write guarantees. The
/// print function is injectable so tests can capture output:
///
/// ```
/// use logchain::{ConsoleWriter, LogLevel, LogRecord, LogWriter};
/// use std::sync::{Arc, Mutex};
///
/// let lines = Arc::new(Mutex::new(Vec::new()));
/// let capture = lines.clone();
/// let writer = ConsoleWriter::with_print(move |line| {
///     capture.lock().unwrap().push(line.to_string());
/// });
///
/// writer.log(&LogRecord::new("ready", LogLevel::Info, None, file!(), line!()));
/// assert_eq!(lines.lock().unwrap().as_slice(), ["ready"]);
/// ```
pub struct ConsoleWriter {
    print: PrintFn,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self::with_print(|line| println!("{line}"))
    }

    /// Routes output through `print` instead of stdout.
    pub fn with_print(print: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            print: Box::new(print),
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleWriter").finish_non_exhaustive()
    }
}

impl LogWriter for ConsoleWriter {
    fn log(&self, record: &LogRecord) {
        (self.print)(&record.formatted);
    }
}

/// Best-effort console diagnostic for the pipeline's own failures.
///
/// Sink I/O errors and fan-out panics land here instead of propagating to
/// the logging call site; this is the only way such failures are observable.
pub(crate) fn diagnostic(message: &str) {
    println!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;
    use std::sync::{Arc, Mutex};

    #[test]
    fn writes_formatted_not_message() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let capture = lines.clone();
        let writer = ConsoleWriter::with_print(move |line| {
            capture.lock().unwrap().push(line.to_string());
        });
        let record = LogRecord::new("raw", LogLevel::Info, None, file!(), line!())
            .with_formatted("display text");

        writer.log(&record);

        assert_eq!(lines.lock().unwrap().as_slice(), ["display text"]);
    }
}
