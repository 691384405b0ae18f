// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# logchain

logchain is a small, composable logging pipeline for Rust.

# The problem

Most logging setups bake one routing policy into the logger itself: one
format, one destination, one threshold. As soon as you want "warnings and up
to a file, everything to the console, and network messages to the system
log", the configuration surface explodes.

logchain takes the opposite approach: there is exactly one capability,
[`LogWriter`] ("accept one record"), and every behavior is a writer that
wraps other writers. Filtering, formatting, and fan-out are ordinary
decorators you compose bottom-up; the pipeline is just a tree of writers.

# The pieces

| Piece | Role |
|---|---|
| [`LogRecord`] | immutable snapshot of one log event, threaded through the whole chain |
| [`LogLevel`] | six-level total order, `Trace` through `Fatal` |
| [`FilterWriter`] | forwards to its child only when a predicate holds |
| [`FormatWriter`] | rewrites the record's display text, then forwards |
| [`ForkWriter`] | forwards one record to N children |
| [`ConsoleWriter`], [`FileWriter`], [`SystemWriter`] | terminal sinks |
| [`MemoryWriter`] | capture sink for tests and programmatic inspection |
| [`manager`] | process-wide default writer plus per-level helpers |

# The API

Compose a pipeline once at startup and install it:

```no_run
use logchain::{manager, ConsoleWriter, FileWriter, ForkWriter, LogLevel, LogWriterExt, SimpleFormat};

manager::set_writer(
    ForkWriter::new()
        .with(FileWriter::new("app.log").filter_level(LogLevel::Warning))
        .with(ConsoleWriter::new().format(SimpleFormat)),
);

manager::error("disk full", Some("storage"));
```

Or drive a writer tree directly, no global state involved:

```
use logchain::{LogLevel, LogRecord, LogWriter, LogWriterExt, MemoryWriter};
use std::sync::Arc;

let sink = Arc::new(MemoryWriter::new());
let writer = sink.clone().filter_level(LogLevel::Warning);

writer.log(&LogRecord::new("ready", LogLevel::Info, None, file!(), line!()));
writer.log(&LogRecord::new("disk low", LogLevel::Warning, None, file!(), line!()));

assert_eq!(sink.records().len(), 1);
```

# Guarantees

A logging call never panics, never returns an error, and never aborts the
process, whatever the health of any configured sink. Records are immutable:
stages that change a record derive a copy, so the branches of a
[`ForkWriter`] can filter and format independently without affecting each
other.

Time is an injected capability ([`Clock`]): the timestamp formatters and
[`manager::time`] both accept one, so tests can pin the wall clock with
[`FixedClock`].

# Non-goals

logchain is not a high-throughput engine. Calls are synchronous, the file
sink reopens its file on every append, and a slow sink blocks the caller.
There is no network transport, no rotation, and no structured wire format.
*/

mod console_writer;
mod file_writer;
mod filter;
mod fork;
mod format;
mod formatters;
mod level;
mod memory_writer;
mod record;
mod system_writer;
mod writer;

pub mod clock;
pub mod manager;

pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use console_writer::ConsoleWriter;
pub use file_writer::FileWriter;
pub use filter::FilterWriter;
pub use fork::ForkWriter;
pub use format::FormatWriter;
pub use formatters::{
    DefaultFormat, FormatFn, FullFormat, LogFormat, MediumFormat, SimpleFormat, default_format,
    format_fn, set_default_format,
};
pub use level::LogLevel;
pub use memory_writer::MemoryWriter;
pub use record::LogRecord;
pub use system_writer::SystemWriter;
pub use writer::{LogWriter, LogWriterExt};
