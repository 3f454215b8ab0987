//! Domain Layer
//!
//! Change detection without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (WatchRoot, IgnoreSet, ModTime, SessionId)
//! - `entities/` - ModTimeIndex, SessionState, ChangeIndex
//! - `services/` - PathFilter, TreeWalker, Detector
//! - `ports/` - DirectoryLister and SessionStore traits
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - The walk goes through the `DirectoryLister` port
//! 2. **No shared mutable state** - Every poll owns its session state
//! 3. **Ports & Adapters** - Persistence goes through `SessionStore`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
