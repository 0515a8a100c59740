//! Environment-driven server configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5555";

/// Server configuration read from environment variables.
pub struct Config {
    /// Database connection URL, e.g. `sqlite://odyssey.db?mode=rwc`
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub bind_address: SocketAddr,
    /// Insert sample planets on startup if the planets table is empty
    pub seed_planets: bool,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `BIND_ADDRESS` or `SEED_PLANETS` could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL"))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS",
                reason: e.to_string(),
            })?;

        let seed_planets = match lookup("SEED_PLANETS").as_deref() {
            None | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "SEED_PLANETS",
                    reason: format!("expected `true` or `false`, got {:?}", other),
                })
            }
        };

        Ok(Self {
            database_url,
            bind_address,
            seed_planets,
        })
    }
}
