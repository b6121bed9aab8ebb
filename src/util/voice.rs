//! One-shot voice dictation via the Web Speech API.
//!
//! Environment detection, not core logic: browsers expose the recognition
//! constructor under a standard or `webkit`-prefixed name, or not at all.
//! Construction goes through `js-sys` reflection so both spellings work;
//! without the capability the microphone control stays hidden.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

/// Recognition language for dictation.
pub const VOICE_LANG: &str = "en-US";

/// Delay between a final transcript and the auto-triggered send.
pub const AUTO_SUBMIT_DELAY_MS: u32 = 100;

/// Transcript text rendered when recognition fails.
pub const VOICE_FALLBACK_MESSAGE: &str = "Voice input failed. Please type your message instead.";

#[cfg(feature = "csr")]
fn recognition_constructor() -> Option<js_sys::Function> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window()?;
    for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
        if let Ok(ctor) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(name)) {
            if let Ok(ctor) = ctor.dyn_into::<js_sys::Function>() {
                return Some(ctor);
            }
        }
    }
    None
}

/// Whether this browser exposes speech recognition.
#[must_use]
pub fn is_supported() -> bool {
    #[cfg(feature = "csr")]
    {
        recognition_constructor().is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Start one-shot (non-continuous, final-results-only) recognition.
///
/// `on_transcript` receives the final transcript, `on_error` fires on a
/// recognition failure, `on_end` fires when the session ends either way.
/// Returns whether recognition actually started.
pub fn start(
    on_transcript: impl Fn(String) + 'static,
    on_error: impl Fn() + 'static,
    on_end: impl Fn() + 'static,
) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(ctor) = recognition_constructor() else {
            return false;
        };
        let Ok(instance) = js_sys::Reflect::construct(&ctor, &js_sys::Array::new()) else {
            return false;
        };
        let recognition: web_sys::SpeechRecognition = instance.unchecked_into();

        recognition.set_continuous(false);
        recognition.set_interim_results(false);
        recognition.set_lang(VOICE_LANG);

        let onresult = Closure::<dyn FnMut(web_sys::SpeechRecognitionEvent)>::new(
            move |ev: web_sys::SpeechRecognitionEvent| {
                let transcript = ev.results().get(0).and_then(|r| r.get(0)).map(|alt| alt.transcript());
                if let Some(transcript) = transcript {
                    on_transcript(transcript);
                }
            },
        );
        recognition.set_onresult(Some(onresult.as_ref().unchecked_ref()));
        onresult.forget();

        let onerror = Closure::<dyn FnMut(web_sys::SpeechRecognitionError)>::new(
            move |ev: web_sys::SpeechRecognitionError| {
                log::warn!("speech recognition error: {:?}", ev.error());
                on_error();
            },
        );
        recognition.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        let onend = Closure::<dyn FnMut()>::new(on_end);
        recognition.set_onend(Some(onend.as_ref().unchecked_ref()));
        onend.forget();

        recognition.start().is_ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (on_transcript, on_error, on_end);
        false
    }
}
