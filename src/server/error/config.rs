use thiserror::Error;

/// Startup configuration could not be read from the environment.
///
/// Only surfaces before the server starts; the binary reports it and exits.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    /// An environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable
        var: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}
