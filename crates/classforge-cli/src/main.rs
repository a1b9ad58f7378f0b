//! Classforge CLI - Generate source scaffolding from class diagram exports

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let mut app = cli::ClassforgeApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
