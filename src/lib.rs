//! livepoll - polling live-reload change detector
//!
//! A browser (or any client) polls an endpoint; each answer says whether
//! any file under the watched directory changed since that client's
//! previous poll. Per-client state is a map of file modification times,
//! built on first contact and compared on every later poll.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PollReport, PollUseCase, WatchEvent, WatchOptions, WatchUseCase};
pub use config::Config;
pub use domain::services::{Detector, PathFilter, TreeWalker};
pub use domain::value_objects::{PollOutcome, SessionId, WatchRoot};
pub use error::{LivepollError, LivepollResult};
