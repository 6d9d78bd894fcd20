use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails fast at startup if required variables are missing. The database
/// URL and LLM credential are required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_timeout_secs: u64,
    pub openai_max_retries: u32,
    pub cache_enabled: bool,
    pub db_pool_size: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            openai_timeout_secs: parse_env("OPENAI_TIMEOUT_SECS", 60)?,
            openai_max_retries: parse_env("OPENAI_MAX_RETRIES", 3)?,
            cache_enabled: std::env::var("CACHE_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            db_pool_size: parse_env("DB_POOL_SIZE", 10)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("'{key}' must be a valid number")),
        Err(_) => Ok(default),
    }
}
