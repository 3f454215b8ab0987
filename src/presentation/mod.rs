//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - The HTTP poll endpoint (axum)
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `server` - Router and server loop for the poll endpoint
//! - `output` - Output rendering for the local commands
//!
//! ## Usage
//!
//! ```ignore
//! use livepoll::presentation::{factory, server};
//!
//! let use_case = factory::create_poll_use_case(&config, &cwd);
//! let app = server::router(use_case, &config.server.route, &config.session.cookie_name);
//! server::serve(app, &config.server.bind, config.server.port).await?;
//! ```

pub mod factory;
pub mod output;
pub mod server;

pub use factory::{create_poll_use_case, create_watch_use_case};
