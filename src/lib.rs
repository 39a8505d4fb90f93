//! stickies - colored sticky notes and checklists kept in a JSON file

pub mod app;
pub mod cli;
pub mod domain;
pub mod editor;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_colors, handle_delete, handle_edit, handle_list, handle_new, handle_search,
        handle_show,
    },
};
use store::{JsonFileStorage, NotesStore};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Colors => return handle_colors(),
        Command::Completions(args) => {
            clap_complete::generate(args.shell, &mut Cli::command(), "stickies", &mut io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load()?;
    let storage = JsonFileStorage::new(config.data_dir(cli.dir.as_ref()), config.key());
    tracing::debug!(path = %storage.path().display(), "opening notes");
    let store = NotesStore::open(storage)?;

    match &cli.command {
        Command::New(args) => handle_new(args, store),
        Command::List(args) => handle_list(args, &store),
        Command::Search(args) => handle_search(args, &store),
        Command::Show(args) => handle_show(args, &store),
        Command::Edit(args) => handle_edit(args, store),
        Command::Delete(args) => handle_delete(args, store),
        Command::Colors | Command::Completions(_) => Ok(()),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
