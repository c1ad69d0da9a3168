use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::logging::LogTarget;

/// A personal portfolio, in your terminal.
#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/termfolio/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the loading intro and open the portfolio directly
    #[arg(long)]
    pub skip_intro: bool,

    /// Append logs to this file; without it logs are discarded
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Load and validate the config, print a summary and exit
    #[arg(long)]
    pub check_config: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Where logs should go. The TUI owns stdout, so without an explicit
    /// file they only surface when no TUI is started.
    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.check_config) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Discard,
        }
    }
}
