// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Canonical log formats, in increasing levels of detail.

A format is a pure function from a record to its display string; the
[`FormatWriter`](crate::FormatWriter) stage turns that into record-to-record
by deriving a copy with the new text. Three formats are supplied:

| Format | Output |
|---|---|
| [`SimpleFormat`] | `ERROR: [fs] disk full` |
| [`MediumFormat`] | `9:30:05 17.05.2024 ERROR: [fs] disk full` |
| [`FullFormat`]   | `9:30:05 17.05.2024 ERROR: [fs] [main.rs:42] disk full` |

The category segment is omitted entirely when the record has no category.
Timestamps come from an injected [`Clock`], never from an ambient global, so
tests can pin them with [`FixedClock`](crate::FixedClock).

Formatting is total: it never fails a log call. The clock capability is
infallible and the timestamp pattern is statically valid, so there is no
error path to recover from.
*/

use crate::clock::{Clock, SharedClock, SystemClock};
use crate::record::LogRecord;
use std::sync::{Arc, OnceLock, RwLock};

/// Timestamp layout shared by [`MediumFormat`] and [`FullFormat`],
/// e.g. `9:30:05 17.05.2024`.
const TIMESTAMP_FORMAT: &str = "%-H:%M:%S %d.%m.%Y";

/// Produces the display string for a record.
///
/// Implemented by the canonical formats below; closures participate via
/// [`format_fn`]. By convention a format reads the whole record but only
/// ever determines the `formatted` field of the derived record.
pub trait LogFormat: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;
}

/// Wraps a closure as a [`LogFormat`], in the manner of
/// [`std::iter::from_fn`].
pub struct FormatFn<F>(F);

/// Turns any `Fn(&LogRecord) -> String` into a [`LogFormat`].
pub fn format_fn<F>(f: F) -> FormatFn<F>
where
    F: Fn(&LogRecord) -> String + Send + Sync,
{
    FormatFn(f)
}

impl<F> LogFormat for FormatFn<F>
where
    F: Fn(&LogRecord) -> String + Send + Sync,
{
    fn format(&self, record: &LogRecord) -> String {
        (self.0)(record)
    }
}

impl<F> std::fmt::Debug for FormatFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatFn").finish_non_exhaustive()
    }
}

fn category_segment(record: &LogRecord) -> String {
    record
        .category
        .as_deref()
        .map(|category| format!("[{category}] "))
        .unwrap_or_default()
}

fn timestamp(clock: &dyn Clock) -> String {
    clock.now().format(TIMESTAMP_FORMAT).to_string()
}

/// Strips any directory prefix up to and including the last `/`.
fn basename(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((_, base)) => base,
        None => path,
    }
}

/// `"{LEVEL}: [{category}] {message}"`, with the whole category segment
/// omitted when the record has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SimpleFormat;

impl LogFormat for SimpleFormat {
    fn format(&self, record: &LogRecord) -> String {
        format!(
            "{}: {}{}",
            record.level,
            category_segment(record),
            record.message
        )
    }
}

/// [`SimpleFormat`] prefixed with a wall-clock timestamp.
#[derive(Debug, Clone)]
pub struct MediumFormat {
    clock: SharedClock,
}

impl MediumFormat {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    pub fn with_shared(clock: SharedClock) -> Self {
        Self { clock }
    }
}

impl Default for MediumFormat {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl LogFormat for MediumFormat {
    fn format(&self, record: &LogRecord) -> String {
        format!(
            "{} {}",
            timestamp(&*self.clock),
            SimpleFormat.format(record)
        )
    }
}

/// [`MediumFormat`] plus the call site as `[file:line]` before the message,
/// with the file reduced to its basename.
#[derive(Debug, Clone)]
pub struct FullFormat {
    clock: SharedClock,
}

impl FullFormat {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    pub fn with_shared(clock: SharedClock) -> Self {
        Self { clock }
    }
}

impl Default for FullFormat {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl LogFormat for FullFormat {
    fn format(&self, record: &LogRecord) -> String {
        format!(
            "{} {}: {}[{}:{}] {}",
            timestamp(&*self.clock),
            record.level,
            category_segment(record),
            basename(record.file),
            record.line,
            record.message
        )
    }
}

static DEFAULT_FORMAT: OnceLock<RwLock<Arc<dyn LogFormat>>> = OnceLock::new();

fn default_format_slot() -> &'static RwLock<Arc<dyn LogFormat>> {
    DEFAULT_FORMAT.get_or_init(|| RwLock::new(Arc::new(MediumFormat::default())))
}

/// The process-wide default format, initially [`MediumFormat`] over the
/// system clock.
pub fn default_format() -> Arc<dyn LogFormat> {
    default_format_slot()
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

/// Replaces the process-wide default format.
pub fn set_default_format(format: impl LogFormat + 'static) {
    *default_format_slot()
        .write()
        .unwrap_or_else(|e| e.into_inner()) = Arc::new(format);
}

/// Defers to whatever [`default_format`] is at the time of each call, for
/// attaching "the current default" to a stage:
///
/// ```
/// use logchain::{ConsoleWriter, DefaultFormat, LogWriterExt};
///
/// let writer = ConsoleWriter::new().format(DefaultFormat);
/// ```
///
/// Do not install `DefaultFormat` itself via [`set_default_format`]; it
/// would recurse.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormat;

impl LogFormat for DefaultFormat {
    fn format(&self, record: &LogRecord) -> String {
        default_format().format(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;
    use crate::clock::FixedClock;
    use chrono::TimeZone;
    use std::sync::Mutex;

    static DEFAULT_FORMAT_GUARD: Mutex<()> = Mutex::new(());

    fn fixed_clock() -> FixedClock {
        FixedClock(
            chrono::Local
                .with_ymd_and_hms(2024, 5, 17, 9, 30, 5)
                .single()
                .expect("unambiguous test time"),
        )
    }

    fn record(category: Option<&str>) -> LogRecord {
        LogRecord::new("disk full", LogLevel::Error, category, "src/storage/main.rs", 42)
    }

    #[test]
    fn simple_with_category() {
        assert_eq!(
            SimpleFormat.format(&record(Some("fs"))),
            "ERROR: [fs] disk full"
        );
    }

    #[test]
    fn simple_without_category_has_no_brackets() {
        assert_eq!(SimpleFormat.format(&record(None)), "ERROR: disk full");
    }

    #[test]
    fn medium_prefixes_timestamp() {
        let format = MediumFormat::new(fixed_clock());
        assert_eq!(
            format.format(&record(Some("fs"))),
            "9:30:05 17.05.2024 ERROR: [fs] disk full"
        );
    }

    #[test]
    fn full_inserts_call_site_basename() {
        let format = FullFormat::new(fixed_clock());
        assert_eq!(
            format.format(&record(Some("fs"))),
            "9:30:05 17.05.2024 ERROR: [fs] [main.rs:42] disk full"
        );
    }

    #[test]
    fn full_keeps_bare_file_names() {
        let format = FullFormat::new(fixed_clock());
        let record = LogRecord::new("m", LogLevel::Info, None, "main.rs", 7);
        assert_eq!(
            format.format(&record),
            "9:30:05 17.05.2024 INFO: [main.rs:7] m"
        );
    }

    #[test]
    fn default_format_is_swappable() {
        let _guard = DEFAULT_FORMAT_GUARD.lock().unwrap();

        set_default_format(SimpleFormat);
        assert_eq!(
            DefaultFormat.format(&record(None)),
            "ERROR: disk full"
        );

        set_default_format(MediumFormat::new(fixed_clock()));
        assert_eq!(
            DefaultFormat.format(&record(None)),
            "9:30:05 17.05.2024 ERROR: disk full"
        );

        set_default_format(MediumFormat::default());
    }
}
