//! Process bootstrap: configuration, router assembly, serving.

pub mod config;
pub mod errors;
pub mod server;

pub use config::Config;
pub use errors::ServerError;
pub use server::{build_router, HttpServer};
