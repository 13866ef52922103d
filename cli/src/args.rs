use clap::Parser;
use std::path::PathBuf;

/// Find the shortest chain of shared films connecting two people.
#[derive(Parser, Debug, Clone)]
#[command(name = "degrees", version, about)]
pub struct Args {
    /// Name of the person to start from (prompted for when omitted)
    pub source: Option<String>,

    /// Name of the person to reach (prompted for when omitted)
    pub target: Option<String>,

    /// Directory containing people.csv, movies.csv, and stars.csv
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Only print the connection flow line
    #[arg(short, long)]
    pub quiet: bool,

    /// Print search statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
