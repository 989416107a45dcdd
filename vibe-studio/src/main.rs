use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use vibe_studio::app::{self, AppConfig};
use vibe_studio::cli::Cli;
use vibe_studio::headless;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("vibe_studio", LevelFilter::Debug)
        .filter_module("vibe_core", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::debug!("RUST_LOG not set, using default log filters");
    } else {
        env_logger::init();
        log::debug!("Initialized logger from RUST_LOG");
    }

    let cli = Cli::parse();
    let landing = cli.loader().load()?;

    if cli.headless {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        runtime.block_on(headless::run(landing, cli.ticks))?;
        return Ok(());
    }

    let config = AppConfig::new(landing);
    app::run(config).map_err(|err| anyhow::anyhow!("landing page window failed: {err}"))
}
