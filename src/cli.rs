//! CLI Argument Parsing
//!
//! Global flags (--verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// livepoll - tells polling browsers when files under a directory change
#[derive(Parser, Debug)]
#[command(name = "livepoll")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./livepoll.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP poll endpoint
    Serve {
        /// Directory to watch
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        bind: Option<String>,
    },

    /// Poll once with a file-backed session and print 1 or 0
    Poll {
        /// Session id (reuse it across invocations)
        #[arg(short, long, default_value = "cli")]
        session: String,

        /// Directory to watch
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Poll continuously and print each change
    Watch {
        /// Directory to watch
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Milliseconds between polls
        #[arg(long, default_value_t = livepoll::application::REFRESH_INTERVAL_MS)]
        interval: u64,

        /// Output NDJSON events
        #[arg(long)]
        json: bool,
    },

    /// List the files and modification times a poll would index
    Index {
        /// Directory to watch
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}
