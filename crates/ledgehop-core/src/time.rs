use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate tick limiter.
///
/// `wait` blocks until one tick budget has passed since the previous call,
/// then reports how long the tick actually took (work + sleep). Ticks that
/// overrun the budget are not made up later.
#[derive(Debug)]
pub struct TickLimiter {
    budget: Duration,
    last: Instant,
    last_elapsed: Duration,
}

impl TickLimiter {
    /// A rate that is not positive and finite, or whose period overflows a
    /// `Duration`, runs unthrottled.
    pub fn new(rate_hz: f32) -> Self {
        Self {
            budget: budget_for(rate_hz),
            last: Instant::now(),
            last_elapsed: Duration::ZERO,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Block until the tick budget has elapsed, returning the full tick time.
    pub fn wait(&mut self) -> Duration {
        let spent = self.last.elapsed();
        if let Some(remaining) = self.budget.checked_sub(spent) {
            thread::sleep(remaining);
        }
        let now = Instant::now();
        self.last_elapsed = now - self.last;
        self.last = now;
        self.last_elapsed
    }

    /// Instantaneous rate derived from the last completed tick.
    pub fn measured_rate(&self) -> f32 {
        let secs = self.last_elapsed.as_secs_f32();
        if secs > 0.0 { 1.0 / secs } else { 0.0 }
    }
}

fn budget_for(rate_hz: f32) -> Duration {
    if rate_hz.is_finite() && rate_hz > 0.0 {
        Duration::try_from_secs_f32(1.0 / rate_hz).unwrap_or(Duration::ZERO)
    } else {
        Duration::ZERO
    }
}
