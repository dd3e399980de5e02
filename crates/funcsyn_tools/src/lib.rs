//! Command-line driver for the funcsyn declaration checker.

pub mod cli;
pub mod suite;
