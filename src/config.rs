//! Command-line configuration.

use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Per-user data directory (~/.ninja-runner) holding the score record and log.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".ninja-runner"))
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "ninja-runner",
    about = "Side-scrolling endless runner for the terminal",
    disable_version_flag = true
)]
pub struct Config {
    /// Directory holding the sprite and sound assets
    #[arg(long, value_name = "DIR", default_value = "assets")]
    pub assets: PathBuf,

    /// High score file (default: ~/.ninja-runner/score.json)
    #[arg(long, value_name = "PATH")]
    pub score_file: Option<PathBuf>,

    /// Log file (default: ~/.ninja-runner/ninja-runner.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Seed for obstacle selection; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start without sound
    #[arg(long)]
    pub mute: bool,

    /// Show version information
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Config {
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
