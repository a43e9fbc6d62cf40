pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::AppConfig;
pub use crate::core::{
    formatter::format_name,
    handler::{HandlerError, RecommendationService},
    recommendations::EdhrecSource,
    resolver::ScryfallResolver,
};
pub use crate::server::{build_router, build_service, serve};
pub use crate::utils::error::{RecsError, Result};
