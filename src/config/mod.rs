//! Configuration module for livepoll
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LIVEPOLL_*)
//! 3. `--config <file>`, else `./livepoll.toml`
//! 4. User config (`<config dir>/livepoll/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, ServerConfig, SessionConfig, SessionStoreKind, WatchConfig};
