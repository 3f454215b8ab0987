//! Directory Lister Implementations
//!
//! Concrete implementations of the DirectoryLister port.

mod config_dir;
mod local;
mod memory;

pub use config_dir::{livepoll_config_dir, LIVEPOLL_CONFIG_DIR_VAR};
pub use local::LocalFs;
pub use memory::MemoryFs;
