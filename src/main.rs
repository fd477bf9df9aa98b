//! Fleet Rental CLI
//!
//! Command-line interface for managing a rental fleet stored in two text files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- vehicles --available
//! cargo run -- add-customer 106 "Christina"
//! cargo run -- add-vehicle Car V108 Vauxhall Corsa 5 300
//! cargo run -- rent 106 V108
//! cargo run -- return 106 V108 --date 2024-03-10
//! cargo run -- search-vehicles --make Audy --model Q8
//! cargo run -- --vehicles fleet.txt --customers people.txt customers
//! ```
//!
//! Each invocation loads both files, runs the command, prints the result to stdout
//! and saves the files again when the command changed anything. Set `RUST_LOG` to
//! see more than warnings on stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown ID, vehicle unavailable, file not readable, etc.)

use fleet_rental::{cli, commands, logging};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    logging::init_logging();

    let mut output = std::io::stdout();
    if let Err(e) = commands::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
