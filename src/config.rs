//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.
//! Fault injection, latency and network availability stay runtime toggles on the
//! repository; only their starting values come from here.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_CACHE_TTL;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache entry lifetime in seconds
    pub cache_ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Initial simulated latency for backing store access, in milliseconds
    pub simulated_latency_ms: u64,
    /// Whether the server seeds the store with sample recipes on startup
    pub seed_sample_data: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Cache entry TTL in seconds (default: 600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SIMULATED_LATENCY_MS` - Initial injected latency (default: 0)
    /// - `SEED_SAMPLE_DATA` - Seed sample recipes (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from any variable source. Missing or unparsable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            cache_ttl_secs: parse_value(lookup("CACHE_TTL_SECS"))
                .unwrap_or(defaults.cache_ttl_secs),
            server_port: parse_value(lookup("SERVER_PORT")).unwrap_or(defaults.server_port),
            simulated_latency_ms: parse_value(lookup("SIMULATED_LATENCY_MS"))
                .unwrap_or(defaults.simulated_latency_ms),
            seed_sample_data: parse_value(lookup("SEED_SAMPLE_DATA"))
                .unwrap_or(defaults.seed_sample_data),
        }
    }

    /// Returns the configured cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL.as_secs(),
            server_port: 3000,
            simulated_latency_ms: 0,
            seed_sample_data: true,
        }
    }
}

fn parse_value<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|v| v.trim().parse().ok())
}
