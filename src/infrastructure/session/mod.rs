//! Session Store Implementations
//!
//! Concrete implementations of the SessionStore port.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
