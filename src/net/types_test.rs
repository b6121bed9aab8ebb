use super::*;

// =============================================================
// Request serialization
// =============================================================

#[test]
fn request_serializes_message_and_persona() {
    let request = ChatRequest {
        message: "hi".to_owned(),
        persona: "gemini".to_owned(),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "hi", "persona": "gemini" }));
}

// =============================================================
// Response parsing
// =============================================================

#[test]
fn reply_payload_parses_into_a_usable_reply() {
    let resp: ChatResponse = serde_json::from_str(r#"{"reply":"hello","model":"groq/compound"}"#).unwrap();
    let reply = resp.into_reply().unwrap();
    assert_eq!(reply.reply, "hello");
    assert_eq!(reply.model.as_deref(), Some("groq/compound"));
}

#[test]
fn reply_without_model_is_still_usable() {
    let resp: ChatResponse = serde_json::from_str(r#"{"reply":"hello"}"#).unwrap();
    let reply = resp.into_reply().unwrap();
    assert_eq!(reply.reply, "hello");
    assert!(reply.model.is_none());
}

#[test]
fn error_payload_becomes_an_application_error() {
    let resp: ChatResponse = serde_json::from_str(r#"{"error":"Model llama-3.1-8b-instant error"}"#).unwrap();
    assert_eq!(
        resp.into_reply(),
        Err(ChatError::Application("Model llama-3.1-8b-instant error".to_owned()))
    );
}

#[test]
fn payload_without_reply_or_error_falls_back_to_unknown() {
    let resp: ChatResponse = serde_json::from_str(r#"{"status":"Chat cleared"}"#).unwrap();
    assert_eq!(resp.into_reply(), Err(ChatError::Application(UNKNOWN_ERROR.to_owned())));
}

// =============================================================
// Error display
// =============================================================

#[test]
fn errors_display_their_context() {
    assert_eq!(
        ChatError::Transport("timed out".to_owned()).to_string(),
        "transport failure: timed out"
    );
    assert_eq!(ChatError::Application("no reply".to_owned()).to_string(), "no reply");
}
