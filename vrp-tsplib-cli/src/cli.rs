#[cfg(test)]
#[path = "../tests/unit/cli_test.rs"]
mod cli_test;

use crate::commands::import::{get_import_app, run_import};
use clap::{ArgMatches, Command};
use vrp_tsplib::format::ConvertError;

/// Returns the command line application definition.
pub fn get_app() -> Command {
    get_import_app()
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts a TSPLIB problem with EUC_2D edge weights into a routing json with a distance matrix")
}

/// Runs the conversion and returns the process exit code.
pub fn run_app(matches: &ArgMatches) -> i32 {
    handle_result(run_import(matches))
}

fn handle_result(result: Result<(), ConvertError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(ConvertError::UnsupportedFormat(err)) => {
            println!("Unsupported EDGE_WEIGHT_TYPE.");
            eprintln!("{}", err.message());
            0
        }
        Err(err) => {
            eprintln!("cannot convert problem: '{err}'");
            1
        }
    }
}
