use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// Upstream chat-completion API settings. The key comes from the
/// environment and is never echoed back to clients.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub chat: ChatConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "qforum".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "qforum-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24),
        };
        let chat = ChatConfig {
            api_url: std::env::var("CHAT_API_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1/chat/completions".into()),
            api_key: std::env::var("CHAT_API_KEY").unwrap_or_default(),
            model: std::env::var("CHAT_MODEL").unwrap_or_else(|_| "llama-3.1-8b-instant".into()),
        };
        Ok(Self {
            database_url,
            jwt,
            chat,
        })
    }
}
