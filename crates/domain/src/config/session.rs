use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Session identity
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Label used for the human side of the transcript.
    #[serde(default = "d_user_name")]
    pub user_name: String,
    /// File holding the name of the last bot chatted with.
    #[serde(default = "d_bot_name_file")]
    pub bot_name_file: PathBuf,
    /// Bot name used when the file is missing or blank.
    #[serde(default = "d_bot_name")]
    pub default_bot_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_name: d_user_name(),
            bot_name_file: d_bot_name_file(),
            default_bot_name: d_bot_name(),
        }
    }
}

fn d_user_name() -> String {
    "You".into()
}
fn d_bot_name_file() -> PathBuf {
    PathBuf::from("bot_name.txt")
}
fn d_bot_name() -> String {
    "Harry Potter".into()
}
