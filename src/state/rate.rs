//! Fixed-window client-side rate limiting for outbound chat requests.
//!
//! DESIGN
//! ======
//! A deliberately soft limit: `attempt` always allows the send and only
//! reports whether the burst warning banner should be visible. The window
//! resets whenever the gap since the previous attempt reaches the minimum
//! interval. Explicit `now` parameters keep the arithmetic testable without
//! a clock.

#[cfg(test)]
#[path = "rate_test.rs"]
mod rate_test;

/// Outbound request budget the warning is derived from.
pub const REQUEST_BUDGET_PER_MINUTE: u64 = 30;

/// Minimum inter-request gap before the window resets.
pub const MIN_INTERVAL_MS: u64 = 60_000 / REQUEST_BUDGET_PER_MINUTE;

/// Requests inside one window before the warning is raised.
pub const BURST_WARNING_CEILING: u32 = 25;

/// Result of recording a send attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptOutcome {
    /// Always `true`: the limit warns, it never blocks.
    pub allowed: bool,
    /// Whether the burst warning should be visible after this attempt.
    pub warning: bool,
}

/// Fixed-window counter over send attempts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimiter {
    last_request_ms: u64,
    window_request_count: u32,
}

impl RateLimiter {
    /// Record a send attempt at `now_ms` and report the warning state.
    pub fn attempt(&mut self, now_ms: u64) -> AttemptOutcome {
        let warning = if now_ms.saturating_sub(self.last_request_ms) >= MIN_INTERVAL_MS {
            self.window_request_count = 1;
            false
        } else {
            self.window_request_count += 1;
            self.window_request_count >= BURST_WARNING_CEILING
        };
        self.last_request_ms = now_ms;
        AttemptOutcome { allowed: true, warning }
    }

    /// Return to the fresh-session state (counters at zero).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Requests recorded in the current window.
    #[must_use]
    pub fn window_request_count(&self) -> u32 {
        self.window_request_count
    }

    /// Timestamp of the most recent attempt, ms since the epoch.
    #[must_use]
    pub fn last_request_ms(&self) -> u64 {
        self.last_request_ms
    }
}
