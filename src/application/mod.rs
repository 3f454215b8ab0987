//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PollUseCase` - Answers one poll for one session (load state, detect, persist)
//! - `WatchUseCase` - Polls on a timer and reports changes locally

pub mod poll;
pub mod watch;

pub use poll::{PollReport, PollUseCase, SessionLocks};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase, INITIAL_DELAY_MS, REFRESH_INTERVAL_MS};
