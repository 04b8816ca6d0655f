//! Server configuration.
//!
//! Everything comes from the environment, with defaults suitable for local
//! development:
//!
//! - `HOST` (default `0.0.0.0`)
//! - `PORT` (default `8080`)
//! - `MONGODB_URI` (default `mongodb://localhost:27017`)
//! - `MONGODB_DB` (default `contacts`)

use std::env;

use super::errors::ServerError;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Storage backend connection string.
    pub mongodb_uri: String,
    /// Database holding the contacts collection.
    pub mongodb_db: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_mongodb_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_mongodb_db() -> String {
    "contacts".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mongodb_uri: default_mongodb_uri(),
            mongodb_db: default_mongodb_db(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// A `PORT` that does not parse as a port number is a startup error,
    /// not a silent fallback.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Seam for tests.
    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ServerError::InvalidConfig { name: "PORT", value })?,
            None => default_port(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(default_host),
            port,
            mongodb_uri: lookup("MONGODB_URI").unwrap_or_else(default_mongodb_uri),
            mongodb_db: lookup("MONGODB_DB").unwrap_or_else(default_mongodb_db),
        })
    }

    /// The socket address string to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
