//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{PollUseCase, WatchOptions, WatchUseCase};
use crate::config::{Config, SessionStoreKind};
use crate::domain::ports::SessionStore;
use crate::infrastructure::{FileSessionStore, InMemorySessionStore, LocalFs};

/// Type alias for the concrete PollUseCase with all dependencies
pub type ConcretePollUseCase = PollUseCase<LocalFs, Arc<dyn SessionStore>>;

/// Type alias for the concrete WatchUseCase with all dependencies
pub type ConcreteWatchUseCase = WatchUseCase<LocalFs, InMemorySessionStore>;

/// Session store selected by `[session] store`
pub fn create_session_store(config: &Config, cwd: &Path) -> Arc<dyn SessionStore> {
    let timeout = config.session.idle_timeout_secs;
    match config.session.store {
        SessionStoreKind::Memory => {
            Arc::new(InMemorySessionStore::new().with_idle_timeout(timeout))
        }
        SessionStoreKind::File => Arc::new(
            FileSessionStore::new(config.session_dir(cwd)).with_idle_timeout(timeout),
        ),
    }
}

/// Create a poll use case with all dependencies wired up
///
/// Relative paths in `config` resolve against `cwd`.
pub fn create_poll_use_case(config: &Config, cwd: &Path) -> ConcretePollUseCase {
    create_poll_use_case_with_store(config, cwd, create_session_store(config, cwd))
}

/// Create a poll use case over an explicit session store
pub fn create_poll_use_case_with_store(
    config: &Config,
    cwd: &Path,
    store: Arc<dyn SessionStore>,
) -> ConcretePollUseCase {
    let root = config.watch_root(cwd);
    let filter = config.path_filter(&root, cwd);
    PollUseCase::new(root, filter, LocalFs::new(), store)
}

/// Create a watch use case; its private session never leaves memory
pub fn create_watch_use_case(
    config: &Config,
    cwd: &Path,
    options: WatchOptions,
) -> ConcreteWatchUseCase {
    let root = config.watch_root(cwd);
    let filter = config.path_filter(&root, cwd);
    let poll = PollUseCase::new(root, filter, LocalFs::new(), InMemorySessionStore::new());
    WatchUseCase::new(poll, options)
}
