//! Decimal Integer Demonstration Entry Point
//!
//! Prints sample computations, or evaluates one `LHS OP RHS` expression.
//! Log output goes to stderr and is filtered through `RUST_LOG` (default `info`).

use std::process;

use clap::Parser;
use frameworks_decimal_demo::{run, DemoArgs};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = DemoArgs::parse();

    let computations = match args.computations() {
        Ok(computations) => computations,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match run(&computations, args.verify) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
