#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use crate::format::*;
use crate::utils::InfoLogger;
use std::io::{BufReader, Read};

const EUC_2D: &str = "EUC_2D";
const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";

/// A trait to read tsplib95 problem. Please note that it is very basic implementation of the format
/// specification: only `EUC_2D` problems with node coordinates are supported.
pub trait TsplibProblem {
    /// Reads tsplib95 problem and converts it into a routing problem with a distance matrix.
    fn read_tsplib(self, logger: &InfoLogger) -> Result<Problem, ConvertError>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self, logger: &InfoLogger) -> Result<Problem, ConvertError> {
        TsplibReader::new(read_lines(self)?, logger.clone()).read_problem()
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self, logger: &InfoLogger) -> Result<Problem, ConvertError> {
        BufReader::new(self.as_bytes()).read_tsplib(logger)
    }
}

/// Raw values of the specification part, as they appear in the file.
#[derive(Default)]
struct HeaderFields {
    name: Option<String>,
    problem_type: Option<String>,
    comment: Option<String>,
    dimension: Option<String>,
    edge_weight_type: Option<String>,
}

type FieldSetter = fn(&mut HeaderFields, String);

const HEADER_FIELDS: [(&str, FieldSetter); 5] = [
    ("NAME", |fields, value| fields.name = Some(value)),
    ("TYPE", |fields, value| fields.problem_type = Some(value)),
    ("COMMENT", |fields, value| fields.comment = Some(value)),
    ("DIMENSION", |fields, value| fields.dimension = Some(value)),
    ("EDGE_WEIGHT_TYPE", |fields, value| fields.edge_weight_type = Some(value)),
];

struct TsplibReader {
    lines: Vec<String>,
    logger: InfoLogger,
}

impl TsplibReader {
    fn new(lines: Vec<String>, logger: InfoLogger) -> Self {
        Self { lines, logger }
    }

    fn read_problem(&self) -> Result<Problem, ConvertError> {
        let meta = self.read_meta()?;
        let nodes = self.read_nodes(meta.dimension)?;

        let (depot_id, depot) = nodes.first().cloned().ok_or_else(|| ConvertError::malformed("no depot node"))?;

        let vehicle = Vehicle { id: depot_id, start: depot, start_index: 0, end: depot, end_index: 0 };

        let jobs = nodes
            .iter()
            .enumerate()
            .skip(1)
            .map(|(location_index, &(id, location))| Job { id, location, location_index })
            .collect::<Vec<_>>();

        let coordinates = nodes.iter().map(|(_, coordinate)| *coordinate).collect::<Vec<_>>();
        let matrix = create_distance_matrix(coordinates.as_slice(), &self.logger);

        let name = meta.name.as_deref().unwrap_or_default();
        (self.logger)(format!("problem '{name}' has {} jobs", jobs.len()).as_str());

        Ok(Problem { meta, vehicles: vec![vehicle], jobs, matrix })
    }

    fn read_meta(&self) -> Result<Meta, ConvertError> {
        let fields = HEADER_FIELDS.iter().fold(HeaderFields::default(), |mut fields, (key, setter)| {
            if let Some(value) = find_value(key, self.lines.as_slice()) {
                setter(&mut fields, value);
            }
            fields
        });

        match fields.edge_weight_type.as_deref() {
            Some(EUC_2D) => {}
            Some(other) => {
                let msg = format!("expecting '{EUC_2D}' as EDGE_WEIGHT_TYPE, got '{other}'");
                return Err(ConvertError::unsupported(msg));
            }
            None => return Err(ConvertError::unsupported("EDGE_WEIGHT_TYPE is not specified")),
        }

        let dimension = fields
            .dimension
            .as_deref()
            .ok_or_else(|| ConvertError::malformed("DIMENSION is not specified"))
            .and_then(|dimension| parse_int(dimension, "cannot parse DIMENSION"))?;

        if dimension < 1 {
            return Err(ConvertError::malformed(format!("DIMENSION should be positive, got '{dimension}'")));
        }

        Ok(Meta {
            name: fields.name,
            problem_type: fields.problem_type,
            comment: fields.comment,
            dimension: dimension as usize,
            edge_weight_type: EUC_2D.to_string(),
        })
    }

    fn read_nodes(&self, dimension: usize) -> Result<Vec<(i64, Coordinate)>, ConvertError> {
        let section_start = self
            .lines
            .iter()
            .position(|line| line.starts_with(NODE_COORD_SECTION))
            .ok_or_else(|| ConvertError::malformed(format!("cannot find {NODE_COORD_SECTION}")))?;

        let node_lines = &self.lines[section_start + 1..];
        if node_lines.len() < dimension {
            return Err(ConvertError::malformed(format!(
                "expecting {dimension} node lines after {NODE_COORD_SECTION}, got {}",
                node_lines.len()
            )));
        }

        node_lines.iter().take(dimension).map(|line| parse_node(line)).collect()
    }
}

/// Returns trimmed value of the first `KEY:` line or, if there is none, of the first `KEY :` line.
fn find_value(key: &str, lines: &[String]) -> Option<String> {
    let find_with = |separator: &str| {
        let prefix = format!("{key}{separator}");
        lines.iter().find_map(|line| line.strip_prefix(prefix.as_str()).map(|value| value.trim().to_string()))
    };

    find_with(":").or_else(|| find_with(" :")).filter(|value| !value.is_empty())
}

fn parse_node(line: &str) -> Result<(i64, Coordinate), ConvertError> {
    let data = split_tokens(line, 3)?;

    let id = parse_int(data[0], "cannot parse node id")?;
    let x = parse_float(data[1], "cannot parse coord.0")?;
    let y = parse_float(data[2], "cannot parse coord.1")?;

    Ok((id, Coordinate(x, y)))
}
