// VenueScrub CLI - venue spreadsheet cleanup, headless

mod analyze;
mod convert;
mod exit_codes;
mod process;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_CONFIG, EXIT_IO, EXIT_PARSE, EXIT_SUCCESS, EXIT_USAGE};
use venuescrub_classify::OverrideTable;

#[derive(Parser)]
#[command(name = "vscrub")]
#[command(about = "Venue spreadsheet cleanup - split addresses, flag online rows, convert formats")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split each row's address into name + street address and route rows
    /// into working / ignored / to-search output files
    #[command(after_help = "\
Examples:
  vscrub process venues.csv
  vscrub process venues.csv --overrides overrides.toml
  vscrub process venues.csv --out-dir cleaned/ --quiet
  vscrub process venues.csv --json | jq .summary")]
    Process {
        /// Input CSV file (required columns: id, address, postcode)
        input: PathBuf,

        /// TOML override table for known-ambiguous rows
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Directory for the three output files (default: input's directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Output the full result as JSON instead of the human report
        #[arg(long)]
        json: bool,

        /// Suppress per-file confirmation lines
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Classify rows and print the report without writing any files
    #[command(after_help = "\
Examples:
  vscrub analyze venues.csv
  vscrub analyze venues.csv --overrides overrides.toml
  vscrub analyze venues.csv --json")]
    Analyze {
        /// Input CSV file (required columns: id, address, postcode)
        input: PathBuf,

        /// TOML override table for known-ambiguous rows
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Output the full result as JSON instead of the human report
        #[arg(long)]
        json: bool,
    },

    /// Convert between CSV and JSON
    #[command(after_help = "\
Examples:
  vscrub convert venues_wip.csv -t json -o venues_wip.json
  vscrub convert venues_wip.json -t csv
  vscrub convert export.txt -f csv -t json
  vscrub convert data.csv -t csv --delimiter ';'")]
    Convert {
        /// Input file
        input: PathBuf,

        /// Input format (inferred from the extension when omitted)
        #[arg(long, short = 'f')]
        from: Option<convert::Format>,

        /// Output format
        #[arg(long, short = 't')]
        to: convert::Format,

        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// CSV delimiter (default: sniffed on input, comma on output)
        #[arg(long)]
        delimiter: Option<char>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            input,
            overrides,
            out_dir,
            json,
            quiet,
        } => process::cmd_process(input, overrides, out_dir, json, quiet),
        Commands::Analyze {
            input,
            overrides,
            json,
        } => analyze::cmd_analyze(input, overrides, json),
        Commands::Convert {
            input,
            from,
            to,
            output,
            delimiter,
        } => convert::cmd_convert(input, from, to, output, delimiter),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError {
            code,
            message,
            hint,
        }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_IO,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_PARSE,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_CONFIG,
            message: msg.into(),
            hint: None,
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Load the override table, or an empty one when no path was given.
fn load_overrides(path: Option<&Path>) -> Result<OverrideTable, CliError> {
    match path {
        None => Ok(OverrideTable::empty()),
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("{}: {}", path.display(), e)))?;
            OverrideTable::from_toml(&content).map_err(|e| {
                CliError::config(e.to_string())
                    .with_hint("each entry needs a non-empty name: [overrides.ID] name = \"...\"")
            })
        }
    }
}
