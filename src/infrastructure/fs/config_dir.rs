//! User configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` uses platform APIs that ignore `HOME` on some
//! systems, so tests cannot redirect it through the environment alone.
//! `livepoll_config_dir()` checks `LIVEPOLL_CONFIG_DIR` first and only
//! then asks the platform.

use std::path::PathBuf;

/// Environment variable that overrides the user configuration directory.
pub const LIVEPOLL_CONFIG_DIR_VAR: &str = "LIVEPOLL_CONFIG_DIR";

/// Directory holding the user-level `config.toml`.
///
/// - `$LIVEPOLL_CONFIG_DIR` when set
/// - otherwise `<platform config dir>/livepoll`
/// - `None` when neither can be resolved
///
/// # Example
///
/// ```
/// use livepoll::infrastructure::fs::livepoll_config_dir;
///
/// if let Some(dir) = livepoll_config_dir() {
///     let user_config = dir.join("config.toml");
///     # let _ = user_config;
/// }
/// ```
pub fn livepoll_config_dir() -> Option<PathBuf> {
    std::env::var(LIVEPOLL_CONFIG_DIR_VAR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("livepoll")))
}
