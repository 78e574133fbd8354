use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use accomplish::cli::Cli;
use accomplish::site;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    site::generate()?;
    Ok(())
}
