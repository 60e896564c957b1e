#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use crate::format::ConvertError;
use crate::utils::{GenericError, GenericResult};
use std::io::{BufReader, Read};
use std::str::FromStr;

/// Reads all lines from the reader, invalid UTF-8 sequences are replaced.
pub(crate) fn read_lines<R: Read>(mut reader: BufReader<R>) -> Result<Vec<String>, ConvertError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    Ok(String::from_utf8_lossy(buffer.as_slice()).lines().map(|line| line.to_string()).collect())
}

/// Splits the line into whitespace separated tokens, expecting exactly `expected` of them.
pub(crate) fn split_tokens(line: &str, expected: usize) -> Result<Vec<&str>, ConvertError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();

    if tokens.len() != expected {
        Err(ConvertError::malformed(format!("unexpected coord data: '{}'", line.trim())))
    } else {
        Ok(tokens)
    }
}

/// Parses integer value, `err_msg` is used as an error prefix.
pub(crate) fn parse_int(data: &str, err_msg: &str) -> Result<i64, ConvertError> {
    parse_value::<i64>(data).map_err(|err| ConvertError::malformed(format!("{err_msg}: '{}'", err.message())))
}

/// Parses finite float value, `err_msg` is used as an error prefix.
pub(crate) fn parse_float(data: &str, err_msg: &str) -> Result<f64, ConvertError> {
    let value = parse_value::<f64>(data).map_err(|err| ConvertError::malformed(format!("{err_msg}: '{err}'")))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConvertError::malformed(format!("{err_msg}: '{data}' is not a finite number")))
    }
}

fn parse_value<T>(data: &str) -> GenericResult<T>
where
    T: FromStr,
    GenericError: From<T::Err>,
{
    Ok(data.parse::<T>()?)
}
