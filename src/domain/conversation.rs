use super::Message;

/// Caller-supplied chat history, oldest message first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Builds the message list sent upstream: `system` first, then the history.
    /// The history itself is left untouched.
    pub fn with_system_message(&self, system: Message) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.push(system);
        messages.extend(self.messages.iter().cloned());
        messages
    }
}
