use std::path::PathBuf;

use clap::Parser;
use vibe_core::config::ENV_CONFIG_PATH;
use vibe_core::{ConfigLoader, EnvConfig};

/// Vibe Studio landing page.
#[derive(Debug, Parser)]
#[command(name = "vibe-studio", version, about)]
pub struct Cli {
    /// TOML file with landing page settings and slides.
    #[arg(long, env = ENV_CONFIG_PATH)]
    pub config: Option<PathBuf>,

    /// Run the carousel without a window, logging each slide change.
    #[arg(long)]
    pub headless: bool,

    /// Number of slide changes to log before a headless run exits.
    #[arg(long, default_value_t = 3, requires = "headless")]
    pub ticks: usize,

    /// Auto-advance interval, e.g. `3500ms` or `5s`.
    #[arg(long)]
    pub interval: Option<String>,
}

impl Cli {
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new().with_env(EnvConfig::from_process());
        if let Some(path) = &self.config {
            loader = loader.with_path(path);
        }
        if let Some(interval) = &self.interval {
            loader = loader.with_interval_override(interval);
        }
        loader
    }
}
