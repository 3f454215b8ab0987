use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use livepoll::presentation::factory;
use livepoll::presentation::output::{render_watch_event, OutputFormat};
use livepoll::WatchOptions;

pub fn cmd_watch(
    config_path: Option<&Path>,
    root: Option<PathBuf>,
    interval_ms: u64,
    json: bool,
) -> Result<()> {
    let (config, cwd) = super::load_config(config_path, root)?;
    let options = WatchOptions {
        interval: Duration::from_millis(interval_ms),
        ..WatchOptions::default()
    };
    let use_case = factory::create_watch_use_case(&config, &cwd, options);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    let format = OutputFormat::from_json_flag(json);
    use_case.start(running, |event| {
        let clock = chrono::Local::now().format("%H:%M:%S").to_string();
        println!("{}", render_watch_event(&event, &clock, format));
    })?;
    Ok(())
}
