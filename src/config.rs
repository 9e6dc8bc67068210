use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;

/// Command-line configuration for the server.
#[derive(Debug, Clone, Parser)]
#[command(name = "courier")]
#[command(about = "Minimal HTTP/1.1 server with echo, user-agent and file routes")]
pub struct Config {
    /// Directory served by the /files routes
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Address the listener binds to
    #[arg(long = "listen", default_value = "0.0.0.0:4221", env = "LISTEN")]
    pub listen_addr: String,

    /// Deadline in milliseconds for reading a full request (unset = no deadline)
    #[arg(long = "read-timeout-ms", env = "READ_TIMEOUT_MS")]
    pub read_timeout_ms: Option<u64>,
}

impl Config {
    /// Parses the process arguments and validates the result.
    pub fn load() -> anyhow::Result<Self> {
        let cfg = Self::parse();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that a supplied `--directory` exists and is a directory.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            let meta = std::fs::metadata(dir)
                .with_context(|| format!("directory {} does not exist", dir.display()))?;
            if !meta.is_dir() {
                bail!("{} is not a directory", dir.display());
            }
        }
        Ok(())
    }

    /// The serving directory, or an empty path when none was configured.
    pub fn serving_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_default()
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_ms.map(Duration::from_millis)
    }
}
