//! funcsyn CLI
//!
//! Checks declaration strings against the fixed function-declaration
//! grammar and runs the built-in conformance suites.

use clap::Parser;
use funcsyn::fndecl;
use funcsyn_tools::cli::{Cli, Commands};
use funcsyn_tools::suite;
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            if fndecl::is_syntactically_correct(&input) {
                println!("valid");
                ExitCode::SUCCESS
            } else {
                println!("invalid");
                ExitCode::FAILURE
            }
        }
        Commands::Suite { delay_ms } => {
            let report = suite::run(Duration::from_millis(delay_ms));
            println!();
            if report.all_passed() {
                println!("{} cases, all verdicts as expected", report.cases);
                ExitCode::SUCCESS
            } else {
                println!(
                    "{} of {} cases disagree with the expected verdict",
                    report.mismatches, report.cases
                );
                ExitCode::FAILURE
            }
        }
    }
}
