//! `vscrub analyze` — classify rows and report without writing files.
//!
//! A dry-run pass over the input: same pipeline as `process`, output is the
//! report only. Useful for sizing the to-search bucket before committing to
//! output files, and for generating the listing a reviewer turns into
//! override entries.

use std::path::PathBuf;

use crate::process::{load_and_run, print_json, print_report};
use crate::CliError;

pub fn cmd_analyze(
    input: PathBuf,
    overrides: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let (_, output) = load_and_run(&input, overrides.as_deref())?;

    if json {
        print_json(&output)
    } else {
        print_report(&output);
        Ok(())
    }
}
