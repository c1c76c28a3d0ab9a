//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Query values in simple indentation-based YAML files
#[derive(Parser, Debug)]
#[command(name = "smallyaml")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Print a shell completion script and continue
    #[arg(long = "generator", value_enum)]
    pub generator: Option<clap_complete::Shell>,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "SMALLYAML_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the scalar value at a path
    Get {
        /// YAML file ("-" reads stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Path such as `database.port` or `data.0.id`
        query: String,
    },

    /// Check whether a path exists
    Exists {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        query: String,
    },

    /// Count the children at a path (empty path counts top-level keys)
    Count {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(default_value = "")]
        query: String,
    },

    /// Show the parsed document as a tree
    Tree {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
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
    /// Print effective settings as TOML
    Show,
    /// Print the global config file location
    Path,
}
