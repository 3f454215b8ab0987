//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::services::PathFilter;
use crate::domain::value_objects::{IgnoreSet, WatchRoot};
use crate::error::LivepollResult;

use super::loader::{self, ConfigWarning};

/// What to watch
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WatchConfig {
    /// Watch root; falls back to `server.document_root`
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Directories to skip, relative to the watch root or absolute
    #[serde(default)]
    pub ignore_dirs: Vec<PathBuf>,

    /// Files to skip, relative to the watch root or absolute
    #[serde(default)]
    pub ignore_files: Vec<PathBuf>,
}

/// HTTP poll endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_route")]
    pub route: String,

    #[serde(default = "default_document_root")]
    pub document_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            route: default_route(),
            document_root: default_document_root(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    35729
}

fn default_route() -> String {
    "/livereload".to_string()
}

fn default_document_root() -> PathBuf {
    PathBuf::from(".")
}

/// Where per-session state lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreKind {
    #[default]
    Memory,
    File,
}

impl SessionStoreKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "file" => Some(Self::File),
            _ => None,
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default)]
    pub store: SessionStoreKind,

    #[serde(default = "default_session_dir")]
    pub dir: PathBuf,

    /// Idle seconds before a session is forgotten; 0 disables expiry
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store: SessionStoreKind::default(),
            dir: default_session_dir(),
            idle_timeout_secs: default_idle_timeout(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_session_dir() -> PathBuf {
    PathBuf::from(".livepoll/sessions")
}

fn default_idle_timeout() -> u64 {
    3600
}

fn default_cookie_name() -> String {
    "livepoll_session".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LivepollResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LivepollResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `explicit`, `<cwd>/livepoll.toml`, user config, or defaults.
    ///
    /// An explicit file must load; the implicit ones are skipped with a
    /// warning when broken.
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> LivepollResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (LIVEPOLL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// The directory to watch, resolved against `cwd`
    pub fn watch_root(&self, cwd: &Path) -> WatchRoot {
        let root = self
            .watch
            .root
            .as_deref()
            .unwrap_or(self.server.document_root.as_path());
        WatchRoot::resolve(root, cwd)
    }

    /// Filter built from the ignore lists, resolved under `root`.
    ///
    /// Entries that do not exist cannot match anything and are dropped.
    /// The session directory is always ignored, since file-backed sessions
    /// rewrite it on every poll.
    pub fn path_filter(&self, root: &WatchRoot, cwd: &Path) -> PathFilter {
        let mut resolved = IgnoreSet::resolve(
            root.path(),
            &self.watch.ignore_dirs,
            &self.watch.ignore_files,
        );
        for missing in &resolved.unresolved {
            warn!(path = %missing.display(), "ignore entry does not exist, dropping it");
        }
        let session_dir = WatchRoot::resolve(&self.session.dir, cwd);
        resolved.set.insert_dir(session_dir.path().to_path_buf());
        PathFilter::new(resolved.set)
    }

    /// Session directory, resolved against `cwd`
    pub fn session_dir(&self, cwd: &Path) -> PathBuf {
        if self.session.dir.is_absolute() {
            self.session.dir.clone()
        } else {
            cwd.join(&self.session.dir)
        }
    }
}
