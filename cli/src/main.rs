mod commands;
mod terminal;

use anyhow::Context;
use commands::{CommandLine, locate};
use lbnode_common::config::Config;
use terminal::{logging, theme::Theme};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = Config::default()
        .with_overrides(|key| std::env::var(key).ok())
        .context("invalid configuration")?;
    let cfg = commands.configure(cfg);
    Theme::from_flag(cfg.plain).apply();

    locate::locate(&commands, &cfg).await
}
