//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// μPhonor - a micro holophonor loop board
#[derive(Parser, Debug)]
#[command(name = "uphonor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute; the terminal UI runs when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run without a terminal UI and print the rendered view
    Headless {
        /// Number of "Add Loop" activations to apply
        #[arg(short = 'n', long, default_value_t = 0)]
        clicks: usize,

        /// Also print the final state as JSON
        #[arg(short, long)]
        export: bool,

        /// Also print the tracer history
        #[arg(short, long)]
        trace: bool,
    },

    /// Write the current configuration (defaults if none) to the config path
    InitConfig,
}
