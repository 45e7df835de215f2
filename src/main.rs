mod cli;
mod config;
mod domain;
mod infra;
mod presentation;
mod workflows;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io;

use cli::Cli;
use infra::prompt::LinePrompt;
use infra::store::JsonFileStore;
use workflows::menu::Menu;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = JsonFileStore::new(config::get_data_path(cli.data_file));
    info!("Using data file: {}", store.path().display());

    let prompt = LinePrompt::new()?;

    Menu::new(store, prompt, io::stdout()).run()
}
