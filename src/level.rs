// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

/// Significance or severity of a log message.
///
/// The six levels form a strict total order by declaration position,
/// `Trace` least severe through `Fatal` most severe.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Detailed flow tracing
    Trace,
    /// Detailed information about the system, for debugging purposes
    Debug,
    /// A record of the normal operation of the system
    Info,
    /// Potential issues that may lead to errors or unexpected behavior if not addressed
    Warning,
    /// Error conditions that impair some operation
    Error,
    /// A critical unrecoverable error condition
    Fatal,
}

impl LogLevel {
    /// Every level, in ascending severity order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Position of this level in the canonical order.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// The canonical uppercase name, e.g. `"WARNING"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_ascending() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn order_agrees_with_rank() {
        for a in LogLevel::ALL {
            for b in LogLevel::ALL {
                assert_eq!(a < b, a.rank() < b.rank());
                assert_eq!(a == b, a.rank() == b.rank());
            }
        }
    }

    #[test]
    fn display_names_are_exact() {
        let names: Vec<String> = LogLevel::ALL.iter().map(|level| level.to_string()).collect();
        assert_eq!(
            names,
            ["TRACE", "DEBUG", "INFO", "WARNING", "ERROR", "FATAL"]
        );
    }
}
