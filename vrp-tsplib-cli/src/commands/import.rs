#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{BufReader, BufWriter};
use std::sync::Arc;
use vrp_tsplib::format::serialize_problem;
use vrp_tsplib::tsplib::TsplibProblem;
use vrp_tsplib::utils::InfoLogger;

const INPUT_ARG_NAME: &str = "INPUT";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_import_app() -> Command {
    Command::new("vrp-tsplib")
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets the TSPLIB problem file to convert").required(true).index(1))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output, derived from input file name by default")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_import(matches: &ArgMatches) -> Result<(), ConvertError> {
    let input_path = matches
        .get_one::<String>(INPUT_ARG_NAME)
        .ok_or_else(|| ConvertError::Io("input file is not specified".into()))?;
    let out_path =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).cloned().unwrap_or_else(|| get_output_path(input_path));

    let logger: InfoLogger = if matches.get_flag(LOG_ARG_NAME) {
        Arc::new(|msg: &str| println!("{msg}"))
    } else {
        Arc::new(|_: &str| {})
    };

    let problem = BufReader::new(open_file(input_path, "input")?).read_tsplib(&logger)?;

    let out_file = create_file(out_path.as_str(), "out result")?;
    println!("Writing problem {input_path} to {out_path}");

    serialize_problem(&problem, &mut BufWriter::new(out_file))
}
