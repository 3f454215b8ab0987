//! livepoll CLI - polling live-reload server
//!
//! Usage: livepoll <COMMAND>
//!
//! Commands:
//!   serve   Run the HTTP poll endpoint
//!   poll    Poll once and print 1 or 0
//!   watch   Poll continuously and print each change
//!   index   List the files a poll would index

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Serve { root, port, bind } => {
            commands::serve::cmd_serve(config_path, root, port, bind)
        }
        Commands::Poll { session, root } => commands::poll::cmd_poll(config_path, &session, root),
        Commands::Watch {
            root,
            interval,
            json,
        } => commands::watch::cmd_watch(config_path, root, interval, json),
        Commands::Index { root, json } => commands::index::cmd_index(config_path, root, json),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from info.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
