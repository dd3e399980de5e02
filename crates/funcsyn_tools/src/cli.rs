//! CLI interface for funcsyn-tools

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "funcsyn")]
#[command(about = "Syntax checker for simplified function declarations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single declaration string
    Check {
        /// The declaration, tokens separated by whitespace
        input: String,
    },
    /// Run the built-in conformance suites
    Suite {
        /// Pause between test cases, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
}
