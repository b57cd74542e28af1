//! Clap-based command-line interface.
//!
//! Defines the [`Cli`] struct with the [`Command`] subcommands and the
//! global flags (--delay-ms, --verbose).

use clap::{Parser, Subcommand};

/// gradeflow — assignment-tracking simulation with timer-driven grading.
#[derive(Debug, Parser)]
#[command(name = "gradeflow", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the simulated grading latency in milliseconds.
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Print the resolved configuration before running.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the built-in classroom demonstration.
    Demo {
        /// Assignments to release during the demo.
        #[arg(default_values_t = [String::from("HW1"), String::from("HW2")])]
        assignments: Vec<String>,
    },
}
