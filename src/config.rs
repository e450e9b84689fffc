use std::env;

/// Server configuration, loaded from the environment.
///
/// The OpenAI API key itself stays ambient: the client library reads
/// `OPENAI_API_KEY` from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Model identifier sent with every generation request.
    pub model: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8000),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "o4-mini".to_string()),
        }
    }
}
