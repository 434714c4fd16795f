use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Chat API connection
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Where the remote chat endpoint lives and how to authenticate.
///
/// The endpoint and bearer token are normally taken from environment
/// variables (named by `endpoint_env` / `api_key_env`); inline values in
/// the config file take precedence when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "d_endpoint_env")]
    pub endpoint_env: String,
    /// Plaintext key. Prefer `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "d_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "d_30000")]
    pub timeout_ms: u64,
    /// Extra attempts on 5xx / timeouts. `0` means a single attempt.
    #[serde(default)]
    pub max_retries: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            endpoint_env: d_endpoint_env(),
            api_key: None,
            api_key_env: d_api_key_env(),
            timeout_ms: 30_000,
            max_retries: 0,
        }
    }
}

/// Endpoint and token after env lookup. Either may be empty; nothing
/// here checks that they are usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApi {
    pub endpoint: String,
    pub api_key: String,
}

impl ApiConfig {
    /// Resolve the endpoint and token from inline values or the process
    /// environment.
    pub fn resolve(&self) -> ResolvedApi {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Same as [`resolve`](Self::resolve) but with an injectable env
    /// lookup, so tests don't have to mutate process state.
    pub fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> ResolvedApi {
        let endpoint = self
            .endpoint
            .clone()
            .or_else(|| lookup(&self.endpoint_env))
            .unwrap_or_default();

        let api_key = match &self.api_key {
            Some(key) => {
                tracing::warn!(
                    "API key loaded from plaintext config field 'api_key' - \
                     prefer 'api_key_env' instead"
                );
                key.clone()
            }
            None => lookup(&self.api_key_env).unwrap_or_default(),
        };

        ResolvedApi { endpoint, api_key }
    }
}

fn d_endpoint_env() -> String {
    "CHATBOT_API_URL".into()
}
fn d_api_key_env() -> String {
    "CHATBOT_API_KEY".into()
}
fn d_30000() -> u64 {
    30_000
}
