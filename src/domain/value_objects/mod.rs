//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod ignore_set;
mod mod_time;
mod poll_outcome;
mod session_id;
mod watch_root;

pub use ignore_set::{EntryKind, IgnoreSet, ResolvedIgnores};
pub use mod_time::ModTime;
pub use poll_outcome::PollOutcome;
pub use session_id::{SessionId, SessionIdError};
pub use watch_root::WatchRoot;
