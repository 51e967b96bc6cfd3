use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Instant,
};

use derive_more::derive::Display;

/// Receives the formatted lines produced by a [TimerRegistry](crate::TimerRegistry).
///
/// Every call carries one complete message. Labels and descriptions are passed
/// through verbatim, so a message may contain line breaks. Implementations
/// should not block for long: the registry emits synchronously from within
/// `start`, `log` and `end`.
pub trait Sink {
    fn info(&self, message: &str);

    /// Reports caller misuse, e.g. ending a timer that was never started.
    fn warn(&self, message: &str) {
        self.info(message);
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// A sink that writes to STDERR and prepends relative timestamps.
///
/// This is the fallback used when the host has no logger of its own.
#[derive(Debug)]
pub struct Logger {
    start_time: Instant,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Logger {
    fn timestamp(&self) -> f32 {
        let elapsed = Instant::now() - self.start_time;
        elapsed.as_millis() as f32 / 1000.0
    }
}

impl Sink for Logger {
    fn info(&self, message: &str) {
        eprintln!("[{:.1}] {}", self.timestamp(), message);
    }

    fn warn(&self, message: &str) {
        eprintln!("[{:.1}] WARN {}", self.timestamp(), message);
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Display)]
pub enum Level {
    #[display("INFO")]
    Info,
    #[display("WARN")]
    Warn,
}

/// A sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    /// All recorded messages, oldest first, without their levels.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    /// All recorded lines together with their levels.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_owned()));
    }
}

impl Sink for MemorySink {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }
}
