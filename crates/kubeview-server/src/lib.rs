//! HTTP listing service for kubeview
//!
//! Serves `/nodes` and `/pods` as JSON and falls back to a static page
//! for every other path.

mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{router, serve};
