//! Command-line interface definitions

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "deskplan")]
#[command(author, version, about = "Replay recorded floor-plan input and print the resulting layout")]
pub struct Cli {
    /// JSON file with a list of input events; omit to print the seed layout
    pub script: Option<PathBuf>,

    /// Config file (TOML or JSON); defaults to the platform config directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start from an empty floor instead of the seed layout
    #[arg(long)]
    pub empty: bool,

    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}
