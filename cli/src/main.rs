//! Teamify - split people into teams under pairing constraints.
//!
//! This is the entry point for the `teamify` binary.

use std::env;
use std::io;
use std::process;

use teamify_cli::{run, Config, USAGE};

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if config.help {
        println!("{}", USAGE);
        return;
    }

    init_tracing(config.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&config, &mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
