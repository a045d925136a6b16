//! Confpanel - Terminal editor for bot automation configuration
//!
//! This application connects to a running config API server, renders the
//! configuration as a form grouped by category, and saves edits back
//! through the API.

use anyhow::Result;
use clap::Parser;

use confpanel::client::ConfigClient;
use confpanel::constants::DEFAULT_SERVER_URL;
use confpanel::tui::{restore_terminal, run_tui, setup_terminal, App};

/// Confpanel - Terminal editor for bot automation configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the config API server
    #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
    server: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = ConfigClient::new(&cli.server)?;
    let mut app = App::new(client);

    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut app, &mut terminal);
    restore_terminal(terminal)?;

    result
}
