//! Startup and serving errors.
//!
//! Everything here is fatal: configuration problems, the initial backend
//! connect, and socket-level failures all abort the process. Business-level
//! failures never reach this type.

use thiserror::Error;

use crate::store::StoreError;

/// Fatal server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// An environment variable did not parse.
    #[error("invalid value for {name}: '{value}'")]
    InvalidConfig { name: &'static str, value: String },

    /// The storage backend could not be reached at startup.
    #[error("failed to connect to storage backend: {0}")]
    Connect(StoreError),

    /// Bind or accept failure.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = ServerError::InvalidConfig {
            name: "PORT",
            value: "eighty".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("PORT"));
        assert!(display.contains("eighty"));
    }
}
