//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// How long a generated answer stays cached, in seconds
    pub cache_ttl_secs: u64,
    /// Maximum encoded size of a single answer chunk, in bytes
    pub chunk_max_bytes: usize,
    /// Expiry sweep interval in seconds; 0 disables the sweep task
    pub sweep_interval_secs: u64,
    /// Upstream generation endpoint
    pub upstream_url: String,
    /// Model requested from the upstream endpoint
    pub upstream_model: String,
    /// Bearer token for the upstream endpoint
    pub api_key: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Answer TTL in seconds (default: 3600)
    /// - `CHUNK_MAX_BYTES` - Chunk size limit in bytes (default: 255)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds, 0 disables (default: 60)
    /// - `UPSTREAM_URL` - Generation endpoint (default: OpenAI responses API)
    /// - `UPSTREAM_MODEL` - Model name (default: gpt-5-nano)
    /// - `OPENAI_API_KEY` - Bearer token (default: empty)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_ttl_secs: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            chunk_max_bytes: env::var("CHUNK_MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(255),
            sweep_interval_secs: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            upstream_url: env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/responses".to_string()),
            upstream_model: env::var("UPSTREAM_MODEL")
                .unwrap_or_else(|_| "gpt-5-nano".to_string()),
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl_secs: 3600,
            chunk_max_bytes: 255,
            sweep_interval_secs: 60,
            upstream_url: "https://api.openai.com/v1/responses".to_string(),
            upstream_model: "gpt-5-nano".to_string(),
            api_key: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_ttl_secs, 3600);
        assert_eq!(config.chunk_max_bytes, 255);
        assert_eq!(config.sweep_interval_secs, 60);
        assert!(config.upstream_url.contains("api.openai.com"));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_TTL");
        env::remove_var("CHUNK_MAX_BYTES");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("UPSTREAM_URL");
        env::remove_var("UPSTREAM_MODEL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_ttl_secs, 3600);
        assert_eq!(config.chunk_max_bytes, 255);
        assert_eq!(config.sweep_interval_secs, 60);
    }
}
