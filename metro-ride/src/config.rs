//! Service configuration.

use std::net::SocketAddr;

use crate::tickets::DEFAULT_TICKET_PREFIX;

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "METRO_RIDE_ADDR";
/// Environment variable for the ticket identifier prefix.
pub const TICKET_PREFIX_VAR: &str = "METRO_RIDE_TICKET_PREFIX";
/// Environment variable for the nearest-station alternatives cap.
pub const MAX_NEAREST_VAR: &str = "METRO_RIDE_MAX_NEAREST";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Prefix for issued ticket identifiers.
    pub ticket_prefix: String,

    /// Upper bound on the `limit` accepted by the nearest-station endpoint.
    pub max_nearest: usize,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError::Invalid {
                var: ADDR_VAR,
                value: value.clone(),
                reason: "expected host:port",
            })?;
        }

        if let Some(value) = lookup(TICKET_PREFIX_VAR) {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
                return Err(ConfigError::Invalid {
                    var: TICKET_PREFIX_VAR,
                    value,
                    reason: "must be a non-empty word",
                });
            }
            config.ticket_prefix = trimmed.to_string();
        }

        if let Some(value) = lookup(MAX_NEAREST_VAR) {
            config.max_nearest = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: MAX_NEAREST_VAR,
                        value,
                        reason: "expected a positive integer",
                    });
                }
            };
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            ticket_prefix: DEFAULT_TICKET_PREFIX.to_string(),
            max_nearest: 10,
        }
    }
}
