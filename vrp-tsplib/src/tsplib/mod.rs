//! Contains logic to read problems from a subset of the TSPLIB95 format.

mod reader;
pub use self::reader::TsplibProblem;
