//! Wall-clock milliseconds for rate-limit timestamps.

/// Current time in ms since the epoch. Zero outside the browser.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
