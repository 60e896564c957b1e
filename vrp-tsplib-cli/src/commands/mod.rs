pub mod import;

use std::fs::File;
use vrp_tsplib::format::ConvertError;

const TSPLIB_EXTENSION: &str = ".tsp";
const JSON_EXTENSION: &str = ".json";

/// Derives output path from the input one: everything starting from the last `.tsp` is
/// replaced with `.json`, or `.json` is appended when there is no `.tsp` at all.
pub(crate) fn get_output_path(input_path: &str) -> String {
    match input_path.rfind(TSPLIB_EXTENSION) {
        Some(idx) => format!("{}{JSON_EXTENSION}", &input_path[..idx]),
        None => format!("{input_path}{JSON_EXTENSION}"),
    }
}

fn open_file(path: &str, description: &str) -> Result<File, ConvertError> {
    File::open(path).map_err(|err| ConvertError::Io(format!("cannot open {description} file '{path}': '{err}'").into()))
}

fn create_file(path: &str, description: &str) -> Result<File, ConvertError> {
    File::create(path)
        .map_err(|err| ConvertError::Io(format!("cannot create {description} file '{path}': '{err}'").into()))
}
