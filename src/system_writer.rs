// SPDX-License-Identifier: MIT OR Apache-2.0

//! System-facility terminal sink.

use crate::LogLevel;
use crate::record::LogRecord;
use crate::writer::LogWriter;

/// A terminal sink that forwards records to the process-wide [`log`] facade,
/// the Rust stand-in for a host severity-bucketed logging facility.
///
/// The six pipeline levels collapse into the facade's four buckets:
/// `Trace`/`Debug` to debug, `Info` to info, `Warning` to warn, and
/// `Error`/`Fatal` both to error. `Fatal` has no distinct bucket, so that
/// distinction is lost at this boundary. The record's category becomes the
/// facade target when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SystemWriter;

impl SystemWriter {
    pub const fn new() -> Self {
        Self
    }
}

impl LogWriter for SystemWriter {
    fn log(&self, record: &LogRecord) {
        let level = match record.level {
            LogLevel::Trace | LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Error | LogLevel::Fatal => log::Level::Error,
        };
        let target = record.category.as_deref().unwrap_or(env!("CARGO_PKG_NAME"));
        log::log!(target: target, level, "{}", record.formatted);
    }
}
