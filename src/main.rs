use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use panorama_converter::args::Args;
use panorama_converter::run;

mod cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(Args::from(cli))
}
