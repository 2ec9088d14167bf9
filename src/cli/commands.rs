use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a to-do list that lives in memory"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read settings from this TOML file (default: $TICK_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// How search and the status tab combine: exclusive or conjunctive
    #[arg(long, global = true)]
    pub composition: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run list commands from a script and print the resulting view
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Script file, one command per line (default: stdin)
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
