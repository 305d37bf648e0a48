//! tomlset binary - brings one TOML file into a requested desired state.
//!
//! Prints exactly one JSON object to stdout: the change report on success,
//! the failure report on any fatal error (accompanied by a non-zero exit
//! status). Log output goes to stderr.

use std::process;

use clap::Parser;
use tomlset::{
    cli::{self, CliArgs, FailureReport},
    tracing_config,
};

fn main() {
    if let Err(e) = tracing_config::init() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let args = CliArgs::parse();

    match cli::run(&args) {
        Ok(report) => println!("{}", report.to_json()),
        Err(e) => {
            println!("{}", FailureReport::from_error(&e).to_json());
            process::exit(1);
        }
    }
}
