//! Haptic tap feedback on supporting devices.
//!
//! Vibration is feature-detected the same way the Navigator API is probed
//! from script; unsupported platforms (and native builds) no-op.

/// Vibration length for a control tap.
pub const TAP_VIBRATION_MS: u32 = 50;

/// Fire a short vibration where the platform supports it.
pub fn tap() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let supported =
            js_sys::Reflect::has(navigator.as_ref(), &wasm_bindgen::JsValue::from_str("vibrate")).unwrap_or(false);
        if supported {
            let _ = navigator.vibrate_with_duration(TAP_VIBRATION_MS);
        }
    }
}
