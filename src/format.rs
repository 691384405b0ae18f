// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatter decorator: rewrites a record's display text before forwarding.

use crate::formatters::LogFormat;
use crate::record::LogRecord;
use crate::writer::LogWriter;
use std::fmt;

/// A [`LogWriter`] that replaces each record's `formatted` field with the
/// output of a [`LogFormat`], then forwards the derived record to a child.
///
/// Formatter stages compose: each stage's output becomes the next stage's
/// input, and since formatting replaces `formatted` wholesale, the last
/// stage applied before a sink wins. The source record is never mutated, so
/// sibling branches of a fan-out are unaffected.
///
/// Most easily constructed via [`LogWriterExt::format`](crate::LogWriterExt::format):
///
/// ```
/// use logchain::{ConsoleWriter, LogWriterExt, SimpleFormat};
///
/// let writer = ConsoleWriter::new().format(SimpleFormat);
/// ```
pub struct FormatWriter<W, F> {
    format: F,
    writer: W,
}

impl<W, F> FormatWriter<W, F>
where
    W: LogWriter,
    F: LogFormat,
{
    pub fn new(format: F, writer: W) -> Self {
        Self { format, writer }
    }

    /// The wrapped writer.
    pub fn inner(&self) -> &W {
        &self.writer
    }
}

impl<W: LogWriter, F> fmt::Debug for FormatWriter<W, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatWriter")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}

impl<W, F> LogWriter for FormatWriter<W, F>
where
    W: LogWriter,
    F: LogFormat,
{
    fn log(&self, record: &LogRecord) {
        self.writer
            .log(&record.with_formatted(self.format.format(record)));
    }
}

#[cfg(test)]
mod tests {
    use crate::memory_writer::MemoryWriter;
    use crate::writer::LogWriterExt;
    use crate::{LogLevel, LogRecord, LogWriter};
    use std::sync::Arc;

    #[test]
    fn format_rewrites_only_formatted() {
        let sink = Arc::new(MemoryWriter::new());
        let writer = sink
            .clone()
            .format_with(|_: &LogRecord| "Some Formatted Text".to_string());
        let record = LogRecord::new("Message", LogLevel::Debug, None, file!(), line!());

        writer.log(&record);

        assert_eq!(sink.records(), vec![record.with_formatted("Some Formatted Text")]);
        // the caller's record is untouched
        assert_eq!(record.formatted, "Message");
    }

    #[test]
    fn stacked_formatters_feed_each_other() {
        let sink = Arc::new(MemoryWriter::new());
        // `outer` wraps the whole chain, so it runs first and `inner` sees
        // its output.
        let writer = sink
            .clone()
            .format_with(|record: &LogRecord| format!("inner({})", record.formatted))
            .format_with(|record: &LogRecord| format!("outer({})", record.formatted));

        writer.log(&LogRecord::new("m", LogLevel::Info, None, file!(), line!()));

        assert_eq!(sink.lines(), ["inner(outer(m))"]);
    }
}
