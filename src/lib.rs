//! # Chronos
//!
//! Named timers that report elapsed time as log lines.
//!
//! A [TimerRegistry] keeps any number of timers, each under its own [Label].
//! Starting, logging and ending a timer produces one formatted message per event
//! on a [Sink], which is either the host's logger or the STDERR [Logger].
//!
//! # Example Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use chronos::*;
//!
//! let registry = TimerRegistry::with_clock(
//!     MemorySink::default(),
//!     Config::default(),
//!     ManualClock::default(),
//! );
//!
//! registry.start(Some("build"), true);
//! registry.clock().advance(Duration::from_millis(1500));
//! registry.log(Some("build"), Some("compiled"), true);
//! registry.clock().advance(Duration::from_millis(500));
//! registry.end(Some("build"), None);
//!
//! assert_eq!(
//!     registry.sink().messages(),
//!     vec![
//!         "Started a new timer with the label 'build'",
//!         "build: 1.5000000000s - compiled",
//!         "build: 2.0000000000s (final)",
//!         "Terminated the timer with the label 'build'",
//!     ]
//! );
//! assert!(!registry.contains("build"));
//! ```
//!
//! Mistakes such as ending a timer twice are reported on the sink instead of
//! being returned, so instrumentation never changes the control flow of the
//! code it measures.

mod clock;
mod config;
mod error;
mod format;
mod label;
mod registry;
mod sink;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use format::*;
pub use label::*;
pub use registry::*;
pub use sink::*;
