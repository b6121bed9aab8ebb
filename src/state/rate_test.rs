use super::*;

// =============================================================
// Spaced attempts
// =============================================================

#[test]
fn interval_is_derived_from_the_per_minute_budget() {
    assert_eq!(MIN_INTERVAL_MS, 2000);
}

#[test]
fn spaced_attempts_keep_the_window_at_one_and_never_warn() {
    let mut limiter = RateLimiter::default();
    for i in 0..10 {
        let outcome = limiter.attempt(10_000 + i * MIN_INTERVAL_MS);
        assert!(outcome.allowed);
        assert!(!outcome.warning, "attempt {i} should not warn");
        assert_eq!(limiter.window_request_count(), 1);
    }
}

#[test]
fn gap_equal_to_the_interval_resets_the_window() {
    let mut limiter = RateLimiter::default();
    limiter.attempt(10_000);
    limiter.attempt(10_100);
    assert_eq!(limiter.window_request_count(), 2);

    let outcome = limiter.attempt(10_100 + MIN_INTERVAL_MS);
    assert!(!outcome.warning);
    assert_eq!(limiter.window_request_count(), 1);
}

// =============================================================
// Burst warning
// =============================================================

#[test]
fn burst_raises_the_warning_exactly_at_the_ceiling() {
    let mut limiter = RateLimiter::default();
    let mut warnings = 0;
    let mut first_warning_at = None;

    for i in 1..=BURST_WARNING_CEILING {
        let outcome = limiter.attempt(10_000 + u64::from(i));
        assert!(outcome.allowed);
        if outcome.warning {
            warnings += 1;
            first_warning_at.get_or_insert(i);
        }
    }

    assert_eq!(first_warning_at, Some(BURST_WARNING_CEILING));
    assert_eq!(warnings, 1);
}

#[test]
fn warning_stays_raised_past_the_ceiling() {
    let mut limiter = RateLimiter::default();
    for i in 1..=BURST_WARNING_CEILING + 5 {
        let outcome = limiter.attempt(10_000 + u64::from(i));
        assert_eq!(outcome.warning, i >= BURST_WARNING_CEILING);
    }
}

#[test]
fn a_quiet_gap_clears_the_warning() {
    let mut limiter = RateLimiter::default();
    for i in 1..=BURST_WARNING_CEILING {
        limiter.attempt(10_000 + u64::from(i));
    }
    let outcome = limiter.attempt(10_000 + u64::from(BURST_WARNING_CEILING) + MIN_INTERVAL_MS);
    assert!(!outcome.warning);
    assert_eq!(limiter.window_request_count(), 1);
}

#[test]
fn soft_limit_never_blocks() {
    let mut limiter = RateLimiter::default();
    for i in 0..100 {
        assert!(limiter.attempt(10_000 + i).allowed);
    }
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_returns_to_the_fresh_session_state() {
    let mut limiter = RateLimiter::default();
    for i in 0..5 {
        limiter.attempt(10_000 + i);
    }

    limiter.reset();
    assert_eq!(limiter, RateLimiter::default());
    assert_eq!(limiter.last_request_ms(), 0);

    // The next attempt behaves as though the session just started.
    let outcome = limiter.attempt(10_500);
    assert!(!outcome.warning);
    assert_eq!(limiter.window_request_count(), 1);
}
