//! Command-line arguments for `drills-runner`.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "drills-runner", version, about = "Check exercises against TOML case files")]
pub struct Args {
    /// Raise log verbosity: `-v` for progress, `-vv` for every case.
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every case in the given files.
    Run {
        /// Case files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the exercise names accepted in case files.
    List,
}

impl Args {
    /// Returns the log filter used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_takes_files() {
        let args =
            Args::try_parse_from(["drills-runner", "-v", "run", "a.toml", "b.toml"]).unwrap();
        assert_eq!(args.default_filter(), "info");
        let Command::Run { files } = args.command else {
            panic!("expected run");
        };
        assert_eq!(files, [PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
    }

    #[test]
    fn run_requires_a_file() {
        assert!(Args::try_parse_from(["drills-runner", "run"]).is_err());
    }

    #[test]
    fn verbosity_counts_after_subcommand() {
        let args = Args::try_parse_from(["drills-runner", "list", "-vvv"]).unwrap();
        assert!(matches!(args.command, Command::List));
        assert_eq!(args.default_filter(), "trace");

        let quiet = Args::try_parse_from(["drills-runner", "list"]).unwrap();
        assert_eq!(quiet.default_filter(), "warn");
    }
}
