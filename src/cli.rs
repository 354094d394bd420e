use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "topwords")]
#[command(
    about = "Reads `user:message` lines from stdin and periodically prints the most frequent words",
    long_about = None
)]
pub struct Cli {
    /// Number of top words per report (overrides config)
    #[arg(long, short = 'k', value_name = "K")]
    pub top: Option<usize>,

    /// Milliseconds between reports (overrides config)
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Config file (default: ~/.config/topwords/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print reports as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append window totals to each report
    #[arg(long, short)]
    pub verbose: bool,
}
