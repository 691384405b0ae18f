// SPDX-License-Identifier: MIT OR Apache-2.0

//! Predicate decorator: conditionally forwards records to a child writer.

use crate::record::LogRecord;
use crate::writer::LogWriter;
use std::fmt;

/// A [`LogWriter`] that forwards records to a wrapped writer only when a
/// predicate holds, dropping the rest silently.
///
/// Most easily constructed via [`LogWriterExt::filter`],
/// [`LogWriterExt::filter_level`], or [`LogWriterExt::filter_categories`]:
///
/// ```
/// use logchain::{FileWriter, LogLevel, LogWriterExt};
///
/// let writer = FileWriter::new("app.log").filter_level(LogLevel::Warning);
/// ```
///
/// [`LogWriterExt::filter`]: crate::LogWriterExt::filter
/// [`LogWriterExt::filter_level`]: crate::LogWriterExt::filter_level
/// [`LogWriterExt::filter_categories`]: crate::LogWriterExt::filter_categories
pub struct FilterWriter<W, P> {
    predicate: P,
    writer: W,
}

impl<W, P> FilterWriter<W, P>
where
    W: LogWriter,
    P: Fn(&LogRecord) -> bool + Send + Sync,
{
    pub fn new(predicate: P, writer: W) -> Self {
        Self { predicate, writer }
    }

    /// The wrapped writer.
    pub fn inner(&self) -> &W {
        &self.writer
    }
}

impl<W: LogWriter, P> fmt::Debug for FilterWriter<W, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterWriter")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}

impl<W, P> LogWriter for FilterWriter<W, P>
where
    W: LogWriter,
    P: Fn(&LogRecord) -> bool + Send + Sync,
{
    fn log(&self, record: &LogRecord) {
        if (self.predicate)(record) {
            self.writer.log(record);
        }
    }
}
