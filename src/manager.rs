// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Process-wide logging facility.

This module holds one replaceable root [`LogWriter`] (initially a
[`ConsoleWriter`]) plus an optional default category, and offers per-level
helpers that capture their call site and construct exactly one
[`LogRecord`] before pushing it through the writer chain.

Configure the pipeline once at startup, then log from anywhere:

```no_run
use logchain::{manager, ConsoleWriter, FileWriter, ForkWriter, LogLevel, LogWriterExt, SimpleFormat};

manager::set_writer(
    ForkWriter::new()
        .with(FileWriter::new("app.log").filter_level(LogLevel::Warning))
        .with(ConsoleWriter::new().format(SimpleFormat)),
);

manager::error("disk full", Some("storage"));
manager::info("startup complete", None);
```

# Thread safety

The writer slot is many-reader/rare-writer state guarded by an `RwLock`
inside a `OnceLock`. Readers clone an `Arc` and release the lock before any
sink I/O runs, so replacing the writer never waits on a slow sink, and a
replaced writer stays alive until in-flight calls finish with it. Lock
poisoning is recovered rather than propagated; a logging call must never
panic at its call site.

# Test isolation

Tests that install their own writer should serialize on a shared guard and
call [`reset`] when done, restoring the console default and clearing the
default category.
*/

use crate::LogLevel;
use crate::clock::{Clock, SystemClock};
use crate::console_writer::ConsoleWriter;
use crate::record::LogRecord;
use crate::writer::LogWriter;
use std::panic::Location;
use std::sync::{Arc, OnceLock, RwLock};

struct State {
    writer: Arc<dyn LogWriter>,
    category: Option<String>,
}

impl State {
    fn initial() -> Self {
        Self {
            writer: Arc::new(ConsoleWriter::new()),
            category: None,
        }
    }
}

static STATE: OnceLock<RwLock<State>> = OnceLock::new();

fn state() -> &'static RwLock<State> {
    STATE.get_or_init(|| RwLock::new(State::initial()))
}

fn read_state<R>(f: impl FnOnce(&State) -> R) -> R {
    f(&state().read().unwrap_or_else(|e| e.into_inner()))
}

fn write_state<R>(f: impl FnOnce(&mut State) -> R) -> R {
    f(&mut state().write().unwrap_or_else(|e| e.into_inner()))
}

/// Replaces the root writer every facility call forwards to.
pub fn set_writer(writer: impl LogWriter + 'static) {
    set_shared_writer(Arc::new(writer));
}

/// Like [`set_writer`], for writers that are already shared.
pub fn set_shared_writer(writer: Arc<dyn LogWriter>) {
    write_state(|state| state.writer = writer);
}

/// The current root writer.
pub fn writer() -> Arc<dyn LogWriter> {
    read_state(|state| state.writer.clone())
}

/// The category attached to records logged without an explicit one.
pub fn default_category() -> Option<String> {
    read_state(|state| state.category.clone())
}

/// Sets the category attached to records logged without an explicit one.
pub fn set_default_category(category: Option<&str>) {
    write_state(|state| state.category = category.map(str::to_owned));
}

/// Restores the initial state: console writer, no default category.
///
/// Teardown hook for tests that share the process-wide slot.
pub fn reset() {
    write_state(|state| *state = State::initial());
}

fn emit(message: String, level: LogLevel, category: Option<&str>, location: &Location<'static>) {
    let (writer, default_category) =
        read_state(|state| (state.writer.clone(), state.category.clone()));
    let category = category.map(str::to_owned).or(default_category);
    let record = LogRecord::new(
        message,
        level,
        category.as_deref(),
        location.file(),
        location.line(),
    );
    writer.log(&record);
}

/// Logs `message` at `level`, capturing this call site's file and line.
#[track_caller]
pub fn log(message: impl Into<String>, level: LogLevel, category: Option<&str>) {
    emit(message.into(), level, category, Location::caller());
}

/// Logs a message at [`LogLevel::Trace`].
#[track_caller]
pub fn trace(message: impl Into<String>, category: Option<&str>) {
    emit(message.into(), LogLevel::Trace, category, Location::caller());
}

/// Logs a message at [`LogLevel::Debug`].
#[track_caller]
pub fn debug(message: impl Into<String>, category: Option<&str>) {
    emit(message.into(), LogLevel::Debug, category, Location::caller());
}

/// Logs a message at [`LogLevel::Info`].
#[track_caller]
pub fn info(message: impl Into<String>, category: Option<&str>) {
    emit(message.into(), LogLevel::Info, category, Location::caller());
}

/// Logs a message at [`LogLevel::Warning`].
#[track_caller]
pub fn warning(message: impl Into<String>, category: Option<&str>) {
    emit(message.into(), LogLevel::Warning, category, Location::caller());
}

/// Logs a message at [`LogLevel::Error`].
#[track_caller]
pub fn error(message: impl Into<String>, category: Option<&str>) {
    emit(message.into(), LogLevel::Error, category, Location::caller());
}

/// Logs a message at [`LogLevel::Fatal`].
///
/// Fatal is logged like an error; it does not terminate the process.
#[track_caller]
pub fn fatal(message: impl Into<String>, category: Option<&str>) {
    emit(message.into(), LogLevel::Fatal, category, Location::caller());
}

/// Logs entry to and elapsed wall-clock duration of `block`, both at
/// `level`, and returns whatever `block` returns.
///
/// Two records are produced: `Enter {message}` before the block and
/// `Elapsed {duration}: {message}` after it. The elapsed record comes from a
/// drop guard, so it appears even if `block` unwinds.
#[track_caller]
pub fn time<R>(
    message: &str,
    level: LogLevel,
    category: Option<&str>,
    block: impl FnOnce() -> R,
) -> R {
    time_with(&SystemClock, message, level, category, block)
}

/// [`time`] against an explicit [`Clock`], so tests can pin the elapsed
/// delta. The same clock should back any timestamp formatter in the
/// pipeline.
#[track_caller]
pub fn time_with<R>(
    clock: &dyn Clock,
    message: &str,
    level: LogLevel,
    category: Option<&str>,
    block: impl FnOnce() -> R,
) -> R {
    let location = Location::caller();
    emit(format!("Enter {message}"), level, category, location);
    let _guard = TimeGuard {
        clock,
        start: clock.now(),
        message,
        level,
        category,
        location,
    };
    block()
}

struct TimeGuard<'a> {
    clock: &'a dyn Clock,
    start: chrono::DateTime<chrono::Local>,
    message: &'a str,
    level: LogLevel,
    category: Option<&'a str>,
    location: &'static Location<'static>,
}

impl Drop for TimeGuard<'_> {
    fn drop(&mut self) {
        let elapsed = self
            .clock
            .now()
            .signed_duration_since(self.start)
            .to_std()
            .unwrap_or_default();
        emit(
            format!("Elapsed {elapsed:?}: {}", self.message),
            self.level,
            self.category,
            self.location,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_writer::MemoryWriter;
    use std::sync::Mutex;

    static TEST_WRITER_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn set_writer_replaces_the_root() {
        let _guard = TEST_WRITER_GUARD.lock().unwrap();
        let sink = Arc::new(MemoryWriter::new());
        set_shared_writer(sink.clone());

        info("captured", None);

        assert_eq!(sink.records().len(), 1);
        reset();
    }

    #[test]
    fn reset_restores_initial_state() {
        let _guard = TEST_WRITER_GUARD.lock().unwrap();
        let sink = Arc::new(MemoryWriter::new());
        set_shared_writer(sink.clone());
        set_default_category(Some("CORE"));

        reset();

        assert_eq!(default_category(), None);
        info("after reset", None);
        assert!(sink.records().is_empty(), "old sink should be disconnected");
    }

    #[test]
    fn writer_slot_survives_concurrent_replacement() {
        use std::thread;

        let _guard = TEST_WRITER_GUARD.lock().unwrap();
        let sink = Arc::new(MemoryWriter::new());
        let sink_clone = sink.clone();

        let handle = thread::spawn(move || {
            set_shared_writer(sink_clone);
        });
        let _ = writer();
        handle.join().expect("replacement thread");

        info("after swap", None);
        assert_eq!(sink.records().len(), 1);
        reset();
    }
}
