// SPDX-License-Identifier: MIT OR Apache-2.0

//! The uniform sink abstraction every pipeline stage implements.

use crate::LogLevel;
use crate::filter::FilterWriter;
use crate::format::FormatWriter;
use crate::formatters::{FormatFn, LogFormat, format_fn};
use crate::record::LogRecord;
use std::fmt::Debug;
use std::sync::Arc;

/// Accepts one record.
///
/// Implemented by decorators (which forward to one or more child writers)
/// and by terminal sinks (which render or persist `record.formatted` and
/// forward nowhere). The contract is deliberately narrow:
///
/// * no return value; side effects are entirely I/O to the underlying sink
/// * must not panic or surface errors for control flow - a logging call
///   never fails at its call site, whatever the health of the sink
/// * safe to invoke from arbitrary call sites; writers self-manage their
///   resources
pub trait LogWriter: Debug + Send + Sync {
    /// Submits the record to this stage.
    fn log(&self, record: &LogRecord);
}

impl<W: LogWriter + ?Sized> LogWriter for &W {
    fn log(&self, record: &LogRecord) {
        (**self).log(record);
    }
}

impl<W: LogWriter + ?Sized> LogWriter for Box<W> {
    fn log(&self, record: &LogRecord) {
        (**self).log(record);
    }
}

impl<W: LogWriter + ?Sized> LogWriter for Arc<W> {
    fn log(&self, record: &LogRecord) {
        (**self).log(record);
    }
}

/// Adapter methods for composing writers bottom-up, in the style of
/// [`Iterator`] adapters.
///
/// ```
/// use logchain::{LogLevel, LogRecord, LogWriter, LogWriterExt, MemoryWriter, SimpleFormat};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemoryWriter::new());
/// let writer = sink.clone().format(SimpleFormat).filter_level(LogLevel::Warning);
///
/// writer.log(&LogRecord::new("ready", LogLevel::Info, None, file!(), line!()));
/// writer.log(&LogRecord::new("disk low", LogLevel::Warning, Some("fs"), file!(), line!()));
///
/// assert_eq!(sink.lines(), ["WARNING: [fs] disk low"]);
/// ```
pub trait LogWriterExt: LogWriter + Sized {
    /// Forward to this writer only records matching `predicate`; drop the
    /// rest silently.
    fn filter<P>(self, predicate: P) -> FilterWriter<Self, P>
    where
        P: Fn(&LogRecord) -> bool + Send + Sync,
    {
        FilterWriter::new(predicate, self)
    }

    /// Forward to this writer only records at `min` severity or above.
    fn filter_level(
        self,
        min: LogLevel,
    ) -> FilterWriter<Self, impl Fn(&LogRecord) -> bool + Send + Sync> {
        self.filter(move |record: &LogRecord| record.level >= min)
    }

    /// Forward to this writer only records whose category is in `categories`.
    ///
    /// A record without a category never matches, whatever the allow-list.
    fn filter_categories<I, S>(
        self,
        categories: I,
    ) -> FilterWriter<Self, impl Fn(&LogRecord) -> bool + Send + Sync>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = categories.into_iter().map(Into::into).collect();
        self.filter(move |record: &LogRecord| {
            record
                .category
                .as_deref()
                .is_some_and(|category| allowed.iter().any(|a| a == category))
        })
    }

    /// Rewrite each record's display text with `format` before it reaches
    /// this writer.
    fn format<F: LogFormat>(self, format: F) -> FormatWriter<Self, F> {
        FormatWriter::new(format, self)
    }

    /// [`format`](Self::format) with a bare closure.
    fn format_with<F>(self, f: F) -> FormatWriter<Self, FormatFn<F>>
    where
        F: Fn(&LogRecord) -> String + Send + Sync,
    {
        FormatWriter::new(format_fn(f), self)
    }
}

impl<W: LogWriter> LogWriterExt for W {}

/*
Boilerplate notes.

# LogWriter

Debug is a supertrait so composed trees stay inspectable and so decorators
can derive or hand-write their own Debug cheaply. Send + Sync because the
facility publishes the root writer process-wide and callers may log from any
thread. Clone/PartialEq/Hash are left to the implementers; a trait-level
requirement would be wrong for sinks that own resources (an open console
handle, a file path with its serialization lock).
*/
