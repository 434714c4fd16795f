//! Wire DTOs for the chat API.
//!
//! Field names are `snake_case` on the wire, same as in Rust.

use serde::{Deserialize, Serialize};

/// One prior message as the API expects it in `chat_history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sender: String,
    pub message: String,
}

/// POST body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Rolling summary of the conversation so far.
    pub memory: String,
    /// The new user turn.
    pub prompt: String,
    pub bot_name: String,
    pub user_name: String,
    /// Full history before this turn, oldest first.
    pub chat_history: Vec<HistoryEntry>,
}

/// Response body. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model_output: Option<String>,
}

impl ChatResponse {
    /// The bot's reply. A missing or `null` `model_output` is an empty
    /// reply, not an error.
    pub fn reply(&self) -> &str {
        self.model_output.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_wire_names() {
        let req = ChatRequest {
            memory: "m".into(),
            prompt: "Hello".into(),
            bot_name: "Harry Potter".into(),
            user_name: "You".into(),
            chat_history: vec![HistoryEntry {
                sender: "You".into(),
                message: "Hi".into(),
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "memory": "m",
                "prompt": "Hello",
                "bot_name": "Harry Potter",
                "user_name": "You",
                "chat_history": [{"sender": "You", "message": "Hi"}],
            })
        );
    }

    #[test]
    fn missing_model_output_is_empty_reply() {
        let resp: ChatResponse = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert_eq!(resp.reply(), "");
    }

    #[test]
    fn null_model_output_is_empty_reply() {
        let resp: ChatResponse = serde_json::from_str(r#"{"model_output": null}"#).unwrap();
        assert_eq!(resp.reply(), "");
    }

    #[test]
    fn non_string_model_output_is_rejected() {
        assert!(serde_json::from_str::<ChatResponse>(r#"{"model_output": 42}"#).is_err());
    }
}
