use super::ConvertError;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// A distance matrix: `matrix[i][j]` is a distance between i-th and j-th coordinates.
pub type DistanceMatrix = Vec<Vec<i64>>;

/// A location on a plane, serialized as `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate(pub f64, pub f64);

/// Problem metadata taken from the specification part of the TSPLIB file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Problem name.
    #[serde(rename = "NAME", skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Problem type, e.g. TSP.
    #[serde(rename = "TYPE", skip_serializing_if = "Option::is_none", default)]
    pub problem_type: Option<String>,
    /// A free form comment.
    #[serde(rename = "COMMENT", skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
    /// Amount of nodes, including the depot.
    #[serde(rename = "DIMENSION")]
    pub dimension: usize,
    /// Edge weight type, always `EUC_2D`.
    #[serde(rename = "EDGE_WEIGHT_TYPE")]
    pub edge_weight_type: String,
}

/// A vehicle which starts and ends its tour at the depot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle id, taken from the depot node id.
    pub id: i64,
    /// Start location.
    pub start: Coordinate,
    /// Start location index in the distance matrix.
    pub start_index: usize,
    /// End location.
    pub end: Coordinate,
    /// End location index in the distance matrix.
    pub end_index: usize,
}

/// A job to be visited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job id, taken from the node id.
    pub id: i64,
    /// Job location.
    pub location: Coordinate,
    /// Location index in the distance matrix.
    pub location_index: usize,
}

/// A converted problem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Problem metadata.
    pub meta: Meta,
    /// Vehicles, always exactly one.
    pub vehicles: Vec<Vehicle>,
    /// Jobs, one per node except the depot.
    pub jobs: Vec<Job>,
    /// Distance matrix for all nodes, depot first.
    pub matrix: DistanceMatrix,
}

/// Serializes `problem` as an indented json and flushes the writer.
pub fn serialize_problem<W: Write>(problem: &Problem, writer: &mut BufWriter<W>) -> Result<(), ConvertError> {
    serde_json::to_writer_pretty(&mut *writer, problem)?;
    writer.flush()?;

    Ok(())
}
