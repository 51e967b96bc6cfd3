use std::{
    collections::{hash_map::Entry, HashMap},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
    time::{Duration, Instant},
};

use crate::{
    format_seconds, Clock, Config, Label, Logger, Sink, SystemClock, TimerError,
    MAX_DECIMAL_PRECISION,
};

#[derive(Clone, Copy, Debug)]
struct Timer {
    start_time: Instant,
    last_log_time: Option<Instant>,
    verbose: bool,
}

/// A set of named timers reporting to a [Sink].
///
/// Each label moves through `absent -> open -> ... -> absent`: [start] opens
/// it, [log] reports on it any number of times and [end] reports one last time
/// and closes it.
///
/// Misuse (starting an open label, logging or ending an absent one) never
/// escapes these methods. It is reported to the sink as a warning carrying the
/// [TimerError::code] and the call returns without touching any timer.
///
/// The registry is safe to share between threads. Existence checks and the
/// following insert or removal happen under a single lock, and messages are
/// emitted after that lock is released.
///
/// [start]: TimerRegistry::start
/// [log]: TimerRegistry::log
/// [end]: TimerRegistry::end
#[derive(Debug)]
pub struct TimerRegistry<S = Logger, C = SystemClock> {
    timers: Mutex<HashMap<Label, Timer>>,
    decimal_precision: AtomicUsize,
    default_label: Label,
    sink: S,
    clock: C,
}

impl Default for TimerRegistry {
    fn default() -> Self {
        Self::new(Logger::default())
    }
}

impl<S: Sink> TimerRegistry<S, SystemClock> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, Config::default())
    }

    pub fn with_config(sink: S, config: Config) -> Self {
        Self::with_clock(sink, config, SystemClock)
    }
}

impl<S: Sink, C: Clock> TimerRegistry<S, C> {
    pub fn with_clock(sink: S, config: Config, clock: C) -> Self {
        Self {
            timers: Mutex::new(HashMap::new()),
            decimal_precision: AtomicUsize::new(
                config.decimal_precision.min(MAX_DECIMAL_PRECISION),
            ),
            default_label: config.default_label,
            sink,
            clock,
        }
    }

    /// Starts a timer under `label`, or under the default label if `label` is
    /// `None` or empty.
    ///
    /// A verbose timer also announces its start and termination.
    pub fn start(&self, label: Option<&str>, verbose: bool) {
        if let Err(err) = self.try_start(label, verbose) {
            self.report(&err);
        }
    }

    /// Reports the time elapsed since `label` was started, keeping it open.
    ///
    /// From the second call on, `show_delta` adds the time elapsed since the
    /// previous call.
    pub fn log(&self, label: Option<&str>, description: Option<&str>, show_delta: bool) {
        if let Err(err) = self.try_log(label, description, show_delta) {
            self.report(&err);
        }
    }

    /// Reports the time elapsed since `label` was started and closes it.
    ///
    /// The timer is removed before anything reaches the sink, so a sink that
    /// queries the registry already sees `label` as absent.
    pub fn end(&self, label: Option<&str>, description: Option<&str>) {
        if let Err(err) = self.try_end(label, description) {
            self.report(&err);
        }
    }

    /// Formats `value` as seconds with `decimals` places, or with the
    /// configured precision if `decimals` is `None`.
    pub fn format(&self, value: Duration, decimals: Option<usize>, with_unit: bool) -> String {
        let decimals = decimals.unwrap_or_else(|| self.decimal_precision());
        format_seconds(value.as_secs_f64(), decimals, with_unit)
    }

    pub fn decimal_precision(&self) -> usize {
        self.decimal_precision.load(Ordering::Relaxed)
    }

    /// Values above [MAX_DECIMAL_PRECISION] are capped.
    pub fn set_decimal_precision(&self, decimals: usize) {
        self.decimal_precision
            .store(decimals.min(MAX_DECIMAL_PRECISION), Ordering::Relaxed);
    }

    pub fn default_label(&self) -> &Label {
        &self.default_label
    }

    /// A snapshot of the current settings.
    pub fn config(&self) -> Config {
        Config {
            decimal_precision: self.decimal_precision(),
            default_label: self.default_label.clone(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.lock().contains_key(label)
    }

    /// Time elapsed since `label` was started, if it is open.
    pub fn elapsed(&self, label: &str) -> Option<Duration> {
        let start_time = self.lock().get(label)?.start_time;
        Some(self.clock.now().saturating_duration_since(start_time))
    }

    /// Labels of all open timers, sorted.
    pub fn labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self.lock().keys().cloned().collect();
        labels.sort();
        labels
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn try_start(&self, label: Option<&str>, verbose: bool) -> Result<(), TimerError> {
        let label = Label::resolve(label, &self.default_label);

        match self.lock().entry(label.clone()) {
            Entry::Occupied(_) => return Err(TimerError::Duplicate(label)),
            Entry::Vacant(entry) => {
                entry.insert(Timer {
                    start_time: self.clock.now(),
                    last_log_time: None,
                    verbose,
                });
            }
        }

        if verbose {
            self.sink
                .info(&format!("Started a new timer with the label '{label}'"));
        }
        Ok(())
    }

    fn try_log(
        &self,
        label: Option<&str>,
        description: Option<&str>,
        show_delta: bool,
    ) -> Result<(), TimerError> {
        let label = Label::resolve(label, &self.default_label);

        // The clock is read under the lock so concurrent logs store their
        // timestamps in order.
        let (now, start_time, last_log_time) = {
            let mut timers = self.lock();
            let timer = timers
                .get_mut(&label)
                .ok_or_else(|| TimerError::Missing(label.clone()))?;
            let now = self.clock.now();
            (now, timer.start_time, timer.last_log_time.replace(now))
        };

        let mut message = self.measurement(&label, now, start_time);
        if let Some(last_log_time) = last_log_time.filter(|_| show_delta) {
            let delta = now.saturating_duration_since(last_log_time);
            message.push_str(" - Time log delta: ");
            message.push_str(&self.format(delta, None, true));
        }
        push_description(&mut message, description);

        self.sink.info(&message);
        Ok(())
    }

    fn try_end(&self, label: Option<&str>, description: Option<&str>) -> Result<(), TimerError> {
        let label = Label::resolve(label, &self.default_label);

        let (now, timer) = {
            let mut timers = self.lock();
            let timer = timers
                .remove(&label)
                .ok_or_else(|| TimerError::Missing(label.clone()))?;
            (self.clock.now(), timer)
        };

        let mut message = self.measurement(&label, now, timer.start_time);
        push_description(&mut message, description);
        if timer.verbose {
            message.push_str(" (final)");
        }

        self.sink.info(&message);
        if timer.verbose {
            self.sink
                .info(&format!("Terminated the timer with the label '{label}'"));
        }
        Ok(())
    }

    fn measurement(&self, label: &Label, now: Instant, start_time: Instant) -> String {
        let elapsed = now.saturating_duration_since(start_time);
        format!("{label}: {}", self.format(elapsed, None, true))
    }

    fn report(&self, err: &TimerError) {
        self.sink.warn(&format!("{err} (code {})", err.code()));
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Label, Timer>> {
        // Timer state is updated in single statements, so a poisoned map is
        // still consistent.
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn push_description(message: &mut String, description: Option<&str>) {
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        message.push_str(" - ");
        message.push_str(description);
    }
}
