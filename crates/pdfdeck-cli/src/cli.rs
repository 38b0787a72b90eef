use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Convert paginated documents into editable, layout-preserving slide decks.
#[derive(Debug, Parser)]
#[command(name = "pdfdeck", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a JSON source dump into a PPTX deck
    Convert {
        /// Path to the JSON source dump
        #[arg(value_name = "DUMP")]
        input: PathBuf,

        /// Path of the PPTX file to write (overwritten if present)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Minimum size difference for shadow classification (points)
        #[arg(long, default_value_t = 2.0)]
        shadow_tolerance: f64,

        /// Suppress the busy indicator
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a structure analysis of a JSON source dump
    Inspect {
        /// Path to the JSON source dump
        #[arg(value_name = "DUMP")]
        input: PathBuf,
    },
}
