use thiserror::Error;

/// Errors raised while building or reconfiguring an agent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Convenience Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
