mod cli;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    // Parse CLI and dispatch.
    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        eprintln!("url2anki error: {:#}", err);
        std::process::exit(1);
    }
}
