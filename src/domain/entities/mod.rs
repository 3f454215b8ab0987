//! Domain Entities
//!
//! - `ModTimeIndex` - path → last-seen modification time
//! - `SessionState` - what one client session persists between polls
//! - `ChangeIndex` - the read/write view of a session used by one poll

mod change_index;
mod mod_time_index;
mod session_state;

pub use change_index::ChangeIndex;
pub use mod_time_index::ModTimeIndex;
pub use session_state::SessionState;
