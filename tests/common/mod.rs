//! Common test utilities for livepoll CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated site directory plus a private user config dir
//! - `TestResult`: Captured output of one CLI run

pub mod env;

pub use env::*;
