use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// The Hugging Face credential is required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_api_key: String,
    pub hf_model: String,
    pub hf_api_base: String,
    pub hf_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hf_api_key: require_env("HUGGINGFACE_API_KEY")?,
            hf_model: std::env::var("HF_MODEL")
                .unwrap_or_else(|_| crate::inference::DEFAULT_MODEL.to_string()),
            hf_api_base: std::env::var("HF_API_BASE")
                .unwrap_or_else(|_| crate::inference::DEFAULT_API_BASE.to_string()),
            hf_timeout_secs: std::env::var("HF_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("HF_TIMEOUT_SECS must be a number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
