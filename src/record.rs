// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for the logchain pipeline.
//!
//! This module defines [`LogRecord`], the immutable snapshot of one logging
//! call that is threaded through the entire writer chain. A record is
//! constructed exactly once, at the call site, and then flows read-only
//! through decorators and sinks. Stages that need to alter it (formatters)
//! derive a new record via [`LogRecord::with_formatted`] rather than mutating
//! shared state, so sibling branches of a fan-out never observe each other's
//! edits.

use crate::LogLevel;

/// An immutable snapshot of one log event.
///
/// Every field is retained throughout the writer chain so that formatting,
/// filtering, and routing decisions can be made at any stage in a fully
/// isolated manner. Equality is structural over all fields, which the test
/// suite leans on to assert exact pipeline behavior.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    /// Raw message as passed to the logging call.
    pub message: String,
    /// Severity of the message.
    pub level: LogLevel,
    /// Optional short tag grouping related log sources, e.g. a subsystem name.
    pub category: Option<String>,
    /// File of the originating logging call, not of any later pipeline stage.
    pub file: &'static str,
    /// Line of the originating logging call.
    pub line: u32,
    /// Display text a terminal sink will render. Starts equal to `message`;
    /// each formatter stage replaces it wholesale.
    pub formatted: String,
}

impl LogRecord {
    /// Creates a record with `formatted` defaulting to `message`.
    pub fn new(
        message: impl Into<String>,
        level: LogLevel,
        category: Option<&str>,
        file: &'static str,
        line: u32,
    ) -> Self {
        let message = message.into();
        Self {
            formatted: message.clone(),
            message,
            level,
            category: category.map(str::to_owned),
            file,
            line,
        }
    }

    /// Returns a record identical to this one except for `formatted`.
    #[must_use]
    pub fn with_formatted(&self, formatted: impl Into<String>) -> Self {
        Self {
            formatted: formatted.into(),
            ..self.clone()
        }
    }
}

/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug/Clone: derived - records are cheap snapshots, decorators clone freely
- PartialEq/Eq: derived - structural equality over all fields is part of the contract
- Hash: derived - consistent with Eq

NOT IMPLEMENTED:
- Copy: owns heap-allocated strings
- Ord/PartialOrd: no meaningful ordering of whole records (level alone orders)
- Default: a record without a call site is not a sensible zero value
- Display: sinks render `formatted` directly; a Display would have to pick
  one of several formats and that choice belongs to the formatter stages
*/
