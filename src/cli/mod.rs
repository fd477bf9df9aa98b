// CLI module
// Command-line interface, argument parsing and input validation

mod args;
pub mod validate;

pub use args::{AddVehicleArgs, CliArgs, Command, SearchVehiclesArgs};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid IDs or names, missing arguments, or `--help`), clap
/// displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
