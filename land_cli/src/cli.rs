use std::path::PathBuf;

use clap::{Parser, Subcommand};
use land_core::{AreaUnit, Language, LinearUnit, UnitSystem};

/// Top-level CLI parser for the `jagga` binary.
#[derive(Debug, Parser)]
#[command(name = "jagga", version, about = "Jagga - Nepali land area calculator and unit converter")]
pub struct Cli {
    /// Command to run; omit for the interactive prompt
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Display language for this run: en, np
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not save results to history
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Directory for history and settings (defaults to LAND_CALC_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate a plot's area from length and breadth
    Area {
        #[arg(allow_negative_numbers = true)]
        length: String,

        #[arg(allow_negative_numbers = true)]
        breadth: String,

        /// Unit of length and breadth: feet, meter
        #[arg(short, long, default_value = "feet")]
        unit: LinearUnit,

        /// Area unit for the result
        #[arg(short, long, default_value = "ropani")]
        output: AreaUnit,
    },

    /// Convert a value between two area units
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: String,

        #[arg(long)]
        from: AreaUnit,

        #[arg(long)]
        to: AreaUnit,

        /// Exchange --from and --to before converting
        #[arg(long)]
        swap: bool,
    },

    /// Break a square-feet area into Ropani or Bigha units
    Breakdown {
        #[arg(allow_negative_numbers = true)]
        square_feet: String,

        #[arg(short, long, default_value = "ropani")]
        system: UnitSystem,
    },

    /// Show or clear saved results
    History {
        #[arg(long)]
        clear: bool,
    },

    /// Show or change the saved display language: en, np, toggle
    Language { choice: Option<String> },
}
