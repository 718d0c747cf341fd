//! Performance instrumentation for input handlers.
//!
//! Pointer move events arrive at display rate or faster, so each handler is
//! wrapped in `profile_scope!`. Without the `profiling` feature the macro
//! compiles to nothing.
//!
//! ## Usage
//!
//! ```ignore
//! use pointer_agent::profile_scope;
//!
//! fn handle_move() {
//!     profile_scope!("handle_move");
//!     // ... state machine update ...
//! }
//! ```
//!
//! Hosts that want numbers without the feature can feed [`measure`] results
//! into an [`InputStats`].

use crate::constants::{HANDLER_WARN_MS, STATS_SAMPLE_COUNT};
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::debug;
#[cfg(feature = "profiling")]
use tracing::trace;
#[cfg(not(feature = "profiling"))]
use tracing::warn;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that reports its duration on drop when it exceeds the
/// threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer for profiling (lower threshold, 0.1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 0.1)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow input handler"
        );
    }
}

// ============================================================================
// Per-channel statistics
// ============================================================================

/// Rolling timing statistics for one input channel.
#[derive(Debug, Clone)]
pub struct ChannelStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for ChannelStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl ChannelStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Total invocations, including samples that rolled out of the window.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Largest sample ever recorded.
    pub fn max(&self) -> f64 {
        self.max_ms
    }

    /// Average over the rolling window.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// 95th percentile over the rolling window.
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }
}

/// Timing statistics keyed by channel name.
#[derive(Debug, Default)]
pub struct InputStats {
    channels: HashMap<&'static str, ChannelStats>,
}

impl InputStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, channel: &'static str, elapsed_ms: f64) {
        self.channels.entry(channel).or_default().record(elapsed_ms);
    }

    /// Run `f`, recording its duration under `channel`.
    pub fn time<T>(&mut self, channel: &'static str, f: impl FnOnce() -> T) -> T {
        let (result, elapsed_ms) = measure(f);
        self.record(channel, elapsed_ms);
        result
    }

    pub fn get(&self, channel: &str) -> Option<&ChannelStats> {
        self.channels.get(channel)
    }

    /// Log channels whose average exceeds the handler budget.
    pub fn log_slow_channels(&self) {
        let mut slow: Vec<_> = self
            .channels
            .iter()
            .filter(|(_, stats)| stats.average() > HANDLER_WARN_MS)
            .collect();
        if slow.is_empty() {
            return;
        }
        slow.sort_by(|a, b| b.1.average().total_cmp(&a.1.average()));

        debug!("Slow input channels:");
        for (name, stats) in slow {
            debug!(
                "  {}: avg={:.2}ms, p95={:.2}ms, max={:.2}ms, count={}",
                name,
                stats.average(),
                stats.p95(),
                stats.max(),
                stats.count()
            );
        }
    }

    pub fn reset(&mut self) {
        self.channels.clear();
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
