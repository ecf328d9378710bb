//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::RenderStyle;

/// Employee registration dossier: build, validate and print the record tree
#[derive(Parser, Debug)]
#[command(name = "dossier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the dossier tree
    Show {
        /// Dossier data file (TOML); sample data when omitted
        #[arg(short = 'f', long, value_hint = ValueHint::FilePath)]
        data: Option<PathBuf>,
        /// Display style
        #[arg(short, long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Try insertions every section must refuse
    Check {
        /// Dossier data file (TOML); sample data when omitted
        #[arg(short = 'f', long, value_hint = ValueHint::FilePath)]
        data: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file location
    Path,
}
