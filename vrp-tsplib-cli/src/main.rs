//! A command line interface to convert TSPLIB problems into routing json.
//!
//! ## Usage
//!
//! - convert a problem writing result next to it as `berlin52.json`
//!
//!     `vrp-tsplib berlin52.tsp`
//!
//! - convert a problem writing result to the file specified, with logging enabled
//!
//!     `vrp-tsplib berlin52.tsp -o problem.json --log`
//!
//! For more details, simply run
//!
//!     vrp-tsplib --help

mod cli;
mod commands;

use self::cli::{get_app, run_app};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    process::exit(run_app(&matches));
}
