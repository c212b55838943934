use serde_json::json;
use sidekick_context::{
    ApiMessage, ContextError, Message, MessageContent, Prompt, Role, WindowContext,
};

#[test]
fn test_message_system() {
    let msg = Message::system("You are helpful");
    assert_eq!(msg.role(), Role::System);
}

#[test]
fn test_message_user() {
    let msg = Message::user(Prompt::new(WindowContext::default(), "hello"));
    assert_eq!(msg.role(), Role::User);
}

#[test]
fn test_message_assistant() {
    let msg = Message::assistant("Hi there!");
    assert_eq!(msg.role(), Role::Assistant);
}

#[test]
fn test_role_as_str() {
    assert_eq!(Role::System.as_str(), "system");
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Assistant.as_str(), "assistant");
}

#[test]
fn test_message_content_from_str() {
    let content: MessageContent = "Test".into();
    assert!(matches!(content, MessageContent::Text(_)));
}

#[test]
fn test_message_content_from_prompt() {
    let content: MessageContent = Prompt::new(WindowContext::default(), "Test").into();
    assert!(matches!(content, MessageContent::Prompt(_)));
}

#[test]
fn test_assistant_payload_exact_shape() {
    let payload = Message::assistant("x").to_api().unwrap();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, json!({"role": "assistant", "content": "x"}));
}

#[test]
fn test_system_payload_passes_text_through() {
    let payload = Message::system("Answer tersely.").to_api().unwrap();
    assert_eq!(payload.role, Role::System);
    assert_eq!(payload.content, "Answer tersely.");
}

#[test]
fn test_user_payload_renders_prompt() {
    let msg = Message::user(Prompt::new(WindowContext::default(), "  list files  "));
    let payload = msg.to_api().unwrap();
    assert_eq!(payload.role, Role::User);
    assert_eq!(payload.content, "User Prompt:\n```\nlist files\n```");
}

#[test]
fn test_user_with_bare_text_is_rejected() {
    let msg = Message {
        role: Role::User,
        content: MessageContent::Text("raw".to_string()),
    };

    let err = msg.to_api().unwrap_err();
    assert!(matches!(err, ContextError::InvariantViolation(_)));
}

#[test]
fn test_user_with_prompt_is_accepted() {
    let msg = Message {
        role: Role::User,
        content: MessageContent::Prompt(Prompt::new(WindowContext::default(), "raw")),
    };

    assert!(msg.to_api().is_ok());
}

#[test]
fn test_api_message_serialization_roundtrip() {
    let payload = ApiMessage {
        role: Role::User,
        content: "Test".to_string(),
    };

    let json = serde_json::to_string(&payload).unwrap();
    let deserialized: ApiMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, payload);
}

#[test]
fn test_api_message_deserialization() {
    let json = r#"{"role":"user","content":"Test"}"#;
    let payload: ApiMessage = serde_json::from_str(json).unwrap();
    assert_eq!(payload.role, Role::User);
    assert_eq!(payload.content, "Test");
}
