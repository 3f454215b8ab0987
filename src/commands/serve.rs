use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use livepoll::presentation::{factory, server};

pub fn cmd_serve(
    config_path: Option<&Path>,
    root: Option<PathBuf>,
    port: Option<u16>,
    bind: Option<String>,
) -> Result<()> {
    let (mut config, cwd) = super::load_config(config_path, root)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    let use_case = factory::create_poll_use_case(&config, &cwd);
    info!(
        root = %use_case.root(),
        route = %config.server.route,
        store = ?config.session.store,
        "serving live-reload polls"
    );
    let app = server::router(use_case, &config.server.route, &config.session.cookie_name);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime
        .block_on(server::serve(app, &config.server.bind, config.server.port))
        .with_context(|| {
            format!(
                "server on {}:{} failed",
                config.server.bind, config.server.port
            )
        })
}
