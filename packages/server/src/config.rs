use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Origins allowed by CORS. Empty means "allow any" (development).
    pub allowed_origins: Vec<String>,
    /// Requests per second allowed per client IP. Zero disables the limiter.
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            rate_limit_per_second: env::var("RATE_LIMIT_PER_SECOND")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("RATE_LIMIT_PER_SECOND must be a valid number")?,
            rate_limit_burst: env::var("RATE_LIMIT_BURST")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .context("RATE_LIMIT_BURST must be a valid number")?,
        })
    }

    /// Configuration for tests and embedded use: no rate limiting, any origin.
    pub fn for_tests(database_url: String) -> Self {
        Self {
            database_url,
            port: 0,
            allowed_origins: Vec::new(),
            rate_limit_per_second: 0,
            rate_limit_burst: 0,
        }
    }
}
