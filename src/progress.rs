//! Rate-limited progress reporting.
//!
//! A [`Progress`] records every update but forwards to its callback at most
//! once per update interval, unless the update is forced.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

/// Callback receiving `(percent, "{tag}: {message}")`.
pub type ProgressCallback = Box<dyn FnMut(f32, &str) + Send>;

/// Progress reporter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressConfig {
    /// Prefix for every emitted message.
    #[cfg_attr(feature = "serde", serde(default = "default_tag"))]
    pub tag: String,

    /// Minimum time between emitted updates, in milliseconds.
    #[cfg_attr(feature = "serde", serde(default = "default_update_interval_ms"))]
    pub update_interval_ms: u64,
}

fn default_tag() -> String {
    "Progress".to_string()
}
fn default_update_interval_ms() -> u64 {
    250
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { tag: default_tag(), update_interval_ms: default_update_interval_ms() }
    }
}

/// Progress reporter with an optional, rate-limited callback.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use fastheap::progress::{Progress, ProgressConfig};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let mut progress = Progress::with_config(ProgressConfig {
///     tag: "Build".to_string(),
///     update_interval_ms: 0,
/// });
/// progress.set_on_update(move |pct, msg| sink.lock().unwrap().push((pct, msg.to_string())));
/// progress.update(0.5, "halfway");
///
/// assert_eq!(seen.lock().unwrap()[0], (0.5, "Build: halfway".to_string()));
/// ```
pub struct Progress {
    config: ProgressConfig,
    on_update: Option<ProgressCallback>,
    last_emit: Instant,
    percent: f32,
    message: String,
}

impl Progress {
    /// Create a reporter with the given tag and the default interval.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_config(ProgressConfig { tag: tag.into(), ..ProgressConfig::default() })
    }

    /// Create a reporter from a full configuration.
    #[must_use]
    pub fn with_config(config: ProgressConfig) -> Self {
        Self {
            config,
            on_update: None,
            last_emit: Instant::now(),
            percent: 0.0,
            message: String::new(),
        }
    }

    /// Install the callback, replacing any previous one.
    pub fn set_on_update<F>(&mut self, callback: F)
    where
        F: FnMut(f32, &str) + Send + 'static,
    {
        self.on_update = Some(Box::new(callback));
    }

    /// Record progress, emitting if the update interval has elapsed.
    pub fn update(&mut self, percent: f32, message: impl Into<String>) {
        self.record(percent, message.into(), false);
    }

    /// Record progress and emit regardless of the interval.
    pub fn update_forced(&mut self, percent: f32, message: impl Into<String>) {
        self.record(percent, message.into(), true);
    }

    /// Record a new percentage, keeping the last message.
    pub fn update_percent(&mut self, percent: f32) {
        let message = std::mem::take(&mut self.message);
        self.record(percent, message, false);
    }

    /// Last recorded percentage.
    #[must_use]
    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Last recorded message, without the tag.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Tag prefixed to emitted messages.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.config.tag
    }

    /// Minimum time between emitted updates.
    #[must_use]
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.config.update_interval_ms)
    }

    fn record(&mut self, percent: f32, message: String, force: bool) {
        self.percent = percent;
        self.message = message;

        let due = self.last_emit.elapsed() >= self.update_interval();
        if !(force || due) {
            trace!(percent, "Progress update suppressed");
            return;
        }

        let Some(callback) = self.on_update.as_mut() else {
            return;
        };
        let line = format!("{}: {}", self.config.tag, self.message);
        debug!(percent, message = %line, forced = force, "Progress emitted");
        callback(self.percent, &line);
        self.last_emit = Instant::now();
    }
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Progress")
            .field("config", &self.config)
            .field("has_callback", &self.on_update.is_some())
            .field("percent", &self.percent)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
