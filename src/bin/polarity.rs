//! Polarity CLI binary.

use clap::Parser;
use polarity::cli::{args::PolarityArgs, commands::execute_command};
use std::process;

fn main() {
    let args = PolarityArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
