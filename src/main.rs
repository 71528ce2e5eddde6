mod cli;
mod config;
mod model;
mod session;
mod storage;
mod tui;

use std::process;

use clap::Parser;

use cli::{Cli, Command};
use config::Config;
use storage::Storage;

fn main() {
    let cli = Cli::parse();

    let root = Storage::default_root().unwrap_or_else(|| {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    });

    let storage = match Storage::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    match cli.command {
        Some(Command::List) => {
            if let Err(e) = cli::list(&storage) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        Some(Command::Reset) => {
            if let Err(e) = cli::reset(&storage) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        None => {
            // Without a start position the map has nowhere to open.
            let config = match Config::load() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            };
            if let Err(e) = tui::run(&storage, &config) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}
