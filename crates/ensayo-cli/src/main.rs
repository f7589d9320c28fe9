//! Ensayo Lab - soil laboratory data entry
//!
//! A CLI tool for filling, checking and exporting moisture content
//! (ASTM D2216) and CBR (ASTM D1883) test records.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
