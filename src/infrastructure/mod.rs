//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Directory listers (local disk, in-memory) and config dir lookup
//! - `session/` - Session stores (in-memory, JSON files)

pub mod fs;
pub mod session;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use session::{FileSessionStore, InMemorySessionStore};
