// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injectable current-time source.
//!
//! The timestamp formatters and the [`manager::time`](crate::manager::time)
//! helper both read the wall clock through this capability, so a test can
//! pin time by handing the same [`FixedClock`] to both.

use chrono::{DateTime, Local};
use std::fmt::Debug;
use std::sync::Arc;

/// Provides the current wall-clock time.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// A clock shared between pipeline stages.
pub type SharedClock = Arc<dyn Clock>;

/// The platform wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SystemClock;

impl SystemClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a single instant, for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
