use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "contact-webhook")]
#[clap(about = "Forwards contact records to a webhook endpoint", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/contact-webhook/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
