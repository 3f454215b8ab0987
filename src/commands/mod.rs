//! Command handlers for the `livepoll` binary

pub mod index;
pub mod poll;
pub mod serve;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use livepoll::Config;

/// Load configuration for a command and log any unknown keys.
///
/// Returns the working directory alongside, since relative paths in the
/// configuration resolve against it.
pub fn load_config(explicit: Option<&Path>, root: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let (mut config, warnings) = Config::discover(explicit, &cwd)?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    if let Some(root) = root {
        config.watch.root = Some(root);
    }
    Ok((config, cwd))
}
