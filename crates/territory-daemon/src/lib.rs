//! Territory Daemon library
//!
//! This module provides the components of the territory daemon:
//! - REST API handlers for access checks and policy creation
//! - Configuration loading
//! - Seed loading of policies at startup
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod seed;
pub mod server;

pub use api::{create_router, AppState};
pub use config::DaemonConfig;
pub use error::{ApiError, ApiResult, DaemonError, DaemonResult};
pub use seed::SeedReport;
pub use server::Server;
