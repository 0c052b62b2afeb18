use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use std::env;

/// Default model used for every assistant action.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: Option<String>,
    pub max_upload_bytes: usize,
    pub session_idle: chrono::Duration,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            gemini_api_key: env::var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY must be set")?,
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL").ok(),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (20 * 1024 * 1024).to_string())
                .parse()
                .context("MAX_UPLOAD_BYTES must be a valid number")?,
            session_idle: parse_idle_hours(
                &env::var("SESSION_IDLE_HOURS").unwrap_or_else(|_| "24".to_string()),
            )
            .context("SESSION_IDLE_HOURS must be a positive number of hours")?,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a valid number")?,
        })
    }
}

/// Parse the idle-session threshold; must be a positive, representable number of hours.
fn parse_idle_hours(raw: &str) -> Result<chrono::Duration> {
    let hours: i64 = raw.trim().parse()?;
    if hours <= 0 {
        return Err(anyhow!("got {}", hours));
    }
    chrono::Duration::try_hours(hours).ok_or_else(|| anyhow!("{} hours is out of range", hours))
}
