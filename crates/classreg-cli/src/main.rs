//! Classreg CLI - build UML class registries from command scripts

mod cli;
mod report;
mod script;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let mut app = cli::ClassregApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
