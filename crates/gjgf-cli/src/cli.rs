// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gjgf", author, version, about = "Normalize graphs into gJGF")]
pub struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Directory holding saved preferences (default: platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize inputs and print a {"graphs": [...]} document
    Normalize(NormalizeArgs),
    /// Show or initialize saved preferences
    Prefs {
        /// Write the default preferences if none are saved yet
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// File paths or JSON text; `-` reads stdin. No inputs reads stdin.
    pub inputs: Vec<String>,
    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
    /// Treat every input as JSON text, never as a path
    #[arg(long)]
    pub no_file_paths: bool,
    /// Reject input files larger than this many bytes
    #[arg(long)]
    pub max_file_bytes: Option<u64>,
}
