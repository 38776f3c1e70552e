use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Invertible lag transforms for tables of numeric series.
#[derive(Parser)]
#[command(
    name = "modelselec",
    version,
    about = "Lagged difference transforms and their exact inverses"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Transform a level table into (log-)differences.
    Forward(ForwardArgs),
    /// Rebuild levels from a differenced table and seed observations.
    Invert(InvertArgs),
}

/// Options shared by both subcommands.
#[derive(clap::Args)]
pub struct TransformArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the lag from config.
    #[arg(short, long)]
    pub lag: Option<usize>,

    /// Override the transform from config (lvl, diff, diffln).
    #[arg(short, long)]
    pub transform: Option<String>,

    /// Path for the output JSON table. Writes to stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `forward` subcommand.
#[derive(clap::Args)]
pub struct ForwardArgs {
    /// Path to the input JSON level table.
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: TransformArgs,
}

/// Arguments for the `invert` subcommand.
#[derive(clap::Args)]
pub struct InvertArgs {
    /// Path to the input JSON differenced table.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the JSON table of seed level observations. Required unless
    /// the transform is `lvl`.
    #[arg(short, long)]
    pub seed: Option<PathBuf>,

    #[command(flatten)]
    pub common: TransformArgs,
}
