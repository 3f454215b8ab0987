use std::path::{Path, PathBuf};

use anyhow::Result;

use livepoll::presentation::factory;
use livepoll::presentation::output::{render_index, OutputFormat};

/// Print what a baseline poll would record.
pub fn cmd_index(config_path: Option<&Path>, root: Option<PathBuf>, json: bool) -> Result<()> {
    let (config, cwd) = super::load_config(config_path, root)?;
    let use_case = factory::create_poll_use_case(&config, &cwd);

    let entries = use_case.snapshot()?;
    let out = render_index(
        use_case.root().path(),
        &entries,
        OutputFormat::from_json_flag(json),
    );
    print!("{}", out);
    if json {
        println!();
    }
    Ok(())
}
