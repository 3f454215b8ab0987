use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use livepoll::infrastructure::FileSessionStore;
use livepoll::presentation::factory;
use livepoll::SessionId;

/// One poll against the file session store, so state survives between runs.
pub fn cmd_poll(config_path: Option<&Path>, session: &str, root: Option<PathBuf>) -> Result<()> {
    let session: SessionId = session
        .parse()
        .with_context(|| format!("invalid session id '{}'", session))?;
    let (config, cwd) = super::load_config(config_path, root)?;

    let store = FileSessionStore::new(config.session_dir(&cwd))
        .with_idle_timeout(config.session.idle_timeout_secs);
    let use_case = factory::create_poll_use_case_with_store(&config, &cwd, Arc::new(store));

    let report = use_case.poll_report(&session)?;
    if let Some(message) = report.root_error {
        bail!(message);
    }
    println!("{}", report.outcome.as_body());
    Ok(())
}
