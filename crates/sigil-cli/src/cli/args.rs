//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Collect a multi-signal fingerprint of this host and hand it to a
/// submission endpoint.
#[derive(Parser, Debug)]
#[command(name = "sigil")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (also honors RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one collection pass and print the record as JSON
    Collect(CollectArgs),

    /// Collect and POST the record to a submission endpoint
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write the record to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Submission endpoint URL
    #[arg(short, long, env = "SIGIL_ENDPOINT")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn collect_flags_parse() {
        let cli = Cli::parse_from(["sigil", "collect", "--pretty", "-o", "fp.json"]);
        match cli.command {
            Commands::Collect(args) => {
                assert!(args.pretty);
                assert_eq!(args.output, Some(PathBuf::from("fp.json")));
            }
            Commands::Submit(_) => panic!("parsed wrong subcommand"),
        }
    }
}
