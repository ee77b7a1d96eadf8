use weft_assistant::{ListMessagesParams, RemoteMessage, RemoteRole};

#[test]
fn remote_role_wire_values() {
    assert_eq!(RemoteRole::User.as_str(), "user");
    assert_eq!(RemoteRole::Assistant.as_str(), "assistant");
    assert_eq!(
        serde_json::to_string(&RemoteRole::Assistant).unwrap(),
        "\"assistant\""
    );
}

#[test]
fn parses_remote_message_payload() {
    let payload = r#"{
        "id": "msg_abc123",
        "object": "thread.message",
        "created_at": 1699017614,
        "thread_id": "thread_abc123",
        "role": "assistant",
        "content": [
            {
                "type": "text",
                "text": { "value": "Hello Ana, acct 555.", "annotations": [] }
            }
        ]
    }"#;

    let message: RemoteMessage = serde_json::from_str(payload).unwrap();

    assert_eq!(message.id, "msg_abc123");
    assert_eq!(message.role, "assistant");
    assert_eq!(message.text(), "Hello Ana, acct 555.");
}

#[test]
fn remote_message_text_skips_non_text_blocks() {
    let payload = r#"{
        "id": "msg_1",
        "created_at": 1,
        "role": "assistant",
        "content": [
            { "type": "image_file", "text": null },
            { "type": "text", "text": { "value": "first" } },
            { "type": "text", "text": { "value": "second" } }
        ]
    }"#;

    let message: RemoteMessage = serde_json::from_str(payload).unwrap();

    assert_eq!(message.text(), "first\nsecond");
}

#[test]
fn remote_message_content_defaults_to_empty() {
    let payload = r#"{ "id": "msg_1", "created_at": 1, "role": "user" }"#;

    let message: RemoteMessage = serde_json::from_str(payload).unwrap();

    assert!(message.content.is_empty());
    assert_eq!(message.text(), "");
}

#[test]
fn list_params_builder() {
    let params = ListMessagesParams::new().limit(20).order("asc").after("msg_1");

    assert_eq!(params.limit, Some(20));
    assert_eq!(params.order.as_deref(), Some("asc"));
    assert_eq!(params.after.as_deref(), Some("msg_1"));
}

#[test]
fn list_params_default_is_empty() {
    let params = ListMessagesParams::default();

    assert_eq!(params.limit, None);
    assert_eq!(params.order, None);
    assert_eq!(params.after, None);
}
