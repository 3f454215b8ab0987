//! Domain Services
//!
//! - `PathFilter` - exact-membership ignore checks
//! - `TreeWalker` - recursive (path, mtime) enumeration of a watch root
//! - `Detector` - one poll cycle against a session's baseline

mod detector;
mod path_filter;
mod tree_walker;

pub use detector::{DetectionPhase, DetectionReport, Detector};
pub use path_filter::PathFilter;
pub use tree_walker::{TreeWalker, WalkStats};
