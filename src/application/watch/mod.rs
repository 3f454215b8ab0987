//! Watch Use Case
//!
//! A local polling loop over the poll use case, with the same cadence as
//! the browser client: wait, then poll at a fixed interval with one
//! private session, emitting an event whenever a change is reported.
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(poll_use_case, WatchOptions::default());
//! use_case.start(running, |event| println!("{}", event.to_json()))?;
//! ```

mod event;
mod use_case;


pub use event::{WatchEvent, WatchOptions, INITIAL_DELAY_MS, REFRESH_INTERVAL_MS};
pub use use_case::WatchUseCase;
