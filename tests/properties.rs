//! Property tests for livepoll.
//!
//! Properties use randomized trees and edits to protect the detector's
//! contract: a poll reports a change exactly when a known, non-ignored
//! file's modification time moved.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/detector.rs"]
mod detector;

#[path = "properties/session_id.rs"]
mod session_id;
