use clap::Parser;
use dupscan::app;
use dupscan::cli::Cli;
use std::process;

fn main() {
    let args = Cli::parse();
    process::exit(app::run(&args).as_i32());
}
