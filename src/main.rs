//! rolodex entry point.
//!
//! Startup order matters: logging first, then configuration, then the
//! backend connect (fatal on failure), and only then the listener. All
//! logic lives in the library; this file only wires it together and turns
//! a startup failure into a non-zero exit.

use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rolodex::server::{Config, HttpServer, ServerError};
use rolodex::store::MongoStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "startup failed");
        eprintln!("{}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = Config::from_env()?;

    let store = MongoStore::connect(&config.mongodb_uri, &config.mongodb_db)
        .await
        .map_err(ServerError::Connect)?;
    tracing::info!(db = %config.mongodb_db, "storage backend connected");

    HttpServer::new(config, Arc::new(store)).start().await
}
