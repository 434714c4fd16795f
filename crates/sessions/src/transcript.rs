//! Append-only, in-memory conversation log.

use mc_transport::HistoryEntry;
use serde::{Deserialize, Serialize};

/// A single message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub text: String,
}

impl Message {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
        }
    }
}

impl From<&Message> for HistoryEntry {
    fn from(m: &Message) -> Self {
        HistoryEntry {
            sender: m.sender.clone(),
            message: m.text.clone(),
        }
    }
}

/// Ordered log of every message exchanged in this session.
///
/// Only [`push`](Transcript::push) can change it; there is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Wire form for the `chat_history` field.
    pub fn to_history(&self) -> Vec<HistoryEntry> {
        self.messages.iter().map(HistoryEntry::from).collect()
    }

    /// Render as `"<sender>: <text>"` lines, oldest first.
    pub fn to_script(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.sender, m.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
