use std::path::PathBuf;

use clap::Parser;

/// Boca Parliament: the site in a native window.
#[derive(Parser, Debug)]
#[command(name = "boca", version, about)]
pub struct Args {
    /// Deep link that launched the app (e.g. `bocaparliament://events/42`).
    pub link: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
