//! This crate contains logic to read a subset of the TSPLIB95 format and convert it into a
//! routing json: a single vehicle starting and ending at the depot, a list of jobs and a dense
//! distance matrix.
//!
//! # Supported input
//!
//! - **tsplib** problems with `EDGE_WEIGHT_TYPE: EUC_2D` and a `NODE_COORD_SECTION`
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vrp_tsplib::tsplib::TsplibProblem;
//! use vrp_tsplib::utils::InfoLogger;
//!
//! let problem = r"NAME : tiny
//! TYPE : TSP
//! DIMENSION : 2
//! EDGE_WEIGHT_TYPE : EUC_2D
//! NODE_COORD_SECTION
//! 1 0 0
//! 2 3 4
//! EOF
//! "
//! .to_string();
//!
//! let logger: InfoLogger = Arc::new(|_: &str| {});
//! let problem = problem.read_tsplib(&logger).unwrap();
//!
//! assert_eq!(problem.matrix, vec![vec![0, 5], vec![5, 0]]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub mod common;
pub mod format;
pub mod tsplib;
pub mod utils;
