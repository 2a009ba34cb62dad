//! Group configuration command and query handlers.

// Command handlers
mod update_config;

// Query handlers
mod get_config;

pub use update_config::{
    UpdateConfigCommand, UpdateConfigError, UpdateConfigHandler, UpdateConfigResult,
};

// Query handlers
pub use get_config::GetConfigHandler;
