use std::path::PathBuf;

use clap::Parser;

/// Hearth: a terminal chat client with a paced, typing-aware reply flow.
#[derive(Parser, Debug)]
#[command(name = "hearth", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error, or a full filter).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Chat service base URL override, e.g. http://127.0.0.1:5000.
    #[arg(long)]
    pub url: Option<String>,

    /// Storage file override.
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Forget the stored client id and start as a new client.
    #[arg(long)]
    pub reset_identity: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
