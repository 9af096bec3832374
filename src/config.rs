use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use tracing::warn;
use crate::error::{AppError, Result};
use crate::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Checked in order; the first non-empty value wins.
pub const API_KEY_VARS: [&str; 2] = ["OPENAI_API_KEY", "VITE_OPENAI_API_KEY"];

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let openai_api_key = API_KEY_VARS
            .iter()
            .find_map(|&key| non_empty(key))
            .unwrap_or_default();
        if openai_api_key.is_empty() {
            warn!(
                "No API key found in {} or {}; summarize requests will fail until one is set",
                API_KEY_VARS[0], API_KEY_VARS[1]
            );
        }

        let host = non_empty("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = non_empty("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        let openai_base_url = non_empty("OPENAI_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Config {
            server_addr,
            openai_api_key,
            openai_base_url,
            model,
        })
    }
}
