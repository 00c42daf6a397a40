use docchat::domain::{Conversation, Message, MessageRole};

fn sample_conversation() -> Conversation {
    Conversation::new(vec![
        Message::user("What is Rust?".to_string()),
        Message::new(MessageRole::Assistant, "A language.".to_string()),
        Message::user("Tell me more.".to_string()),
    ])
}

#[test]
fn given_conversation_when_reading_latest_then_returns_last_message() {
    let conversation = sample_conversation();

    assert_eq!(conversation.latest().unwrap().content, "Tell me more.");
}

#[test]
fn given_empty_conversation_when_reading_latest_then_returns_none() {
    let conversation = Conversation::default();

    assert!(conversation.is_empty());
    assert!(conversation.latest().is_none());
}

#[test]
fn given_system_message_when_prepending_then_original_is_untouched() {
    let conversation = sample_conversation();
    let before = conversation.clone();

    let messages = conversation.with_system_message(Message::system("ctx".to_string()));

    assert_eq!(conversation, before);
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, MessageRole::System);
    assert_eq!(messages[0].content, "ctx");
    assert_eq!(&messages[1..], &before.messages[..]);
}
