//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod directory_lister;
pub mod session_store;

pub use directory_lister::{DirEntries, DirectoryLister, FsError, FsResult};
pub use session_store::{SessionStore, SessionStoreError};
