mod actions;
mod app;
mod cli;
mod component;
mod config;
#[cfg(not(tarpaulin_include))]
mod tui;
mod utils;

use app::{App, RootState};
use clap::Parser;
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[cfg(not(tarpaulin_include))]
async fn run() -> Result<()> {
    use cli::ClapSource;
    use color_eyre::eyre::Context;

    let args = cli::Cli::parse();

    let config = crate::config::Config::new(Some(ClapSource::new(&args)))
        .context("Error when loading config")?;

    let state = RootState::new(config);
    let mut app = App::new(
        state,
        tui::Tui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate)
            .into(),
    );

    app.run().await
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<()> {
    dotenv().ok();
    utils::errors::init()?;
    utils::logging::init()?;

    run().await
}
