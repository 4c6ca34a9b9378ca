//! Pharmacy claim report CLI.

use clap::Parser;
use rx_cli::cli::Cli;
use rx_cli::logging::init_logging;
use rx_cli::summary::print_summary;

mod commands;

use crate::commands::run_command;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_command(&cli.command) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
