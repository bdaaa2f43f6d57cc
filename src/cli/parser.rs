use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for seatlogger
/// Samples reading-room seat occupancy and appends it to a CSV log
#[derive(Parser)]
#[command(
    name = "seatlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sample library reading-room seat occupancy and append it to a CSV log",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the log file of the selected mode (useful for tests or ad-hoc runs)
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration and list problems")]
        check: bool,
    },

    /// Collect the aggregate seat counts of the target room
    Summary,

    /// Collect the status of every seat in the configured rooms
    Seats {
        /// Restrict the run to these room ids (repeatable)
        #[arg(long = "room", value_name = "ID")]
        rooms: Vec<i64>,
    },

    /// Print the last rows of a log
    Show {
        /// Show the per-seat log instead of the summary log
        #[arg(long)]
        seats: bool,

        /// Number of rows to print
        #[arg(long, short = 'n', default_value_t = 10)]
        last: usize,
    },
}
