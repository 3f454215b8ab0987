//! Poll Use Case
//!
//! The boundary of change detection: one call per client poll.
//! It loads the client's session, runs the detector, persists or clears
//! the session, and answers `Change` / `NoChange`.
//!
//! ## Architecture
//!
//! - `PollUseCase` - Orchestrator, generic over lister and store
//! - `SessionLocks` - Per-session mutual exclusion
//! - `PollReport` - Outcome plus what the detector saw

mod locks;
mod use_case;


pub use locks::SessionLocks;
pub use use_case::{PollReport, PollUseCase};
