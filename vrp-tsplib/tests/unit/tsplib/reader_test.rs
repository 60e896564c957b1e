use super::*;
use crate::helpers::*;

const EXAMPLE_PATH: &str = "data/example.tsp";

fn create_reader(content: &str) -> TsplibReader {
    TsplibReader::new(content.lines().map(|line| line.to_string()).collect(), create_silent_logger())
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

#[test]
fn can_find_value_with_and_without_space() {
    let lines = to_lines(&["NAME : berlin52", "TYPE: TSP", "COMMENT :   spaced  out  ", "DIMENSION:52"]);

    assert_eq!(find_value("NAME", &lines), Some("berlin52".to_string()));
    assert_eq!(find_value("TYPE", &lines), Some("TSP".to_string()));
    assert_eq!(find_value("COMMENT", &lines), Some("spaced  out".to_string()));
    assert_eq!(find_value("DIMENSION", &lines), Some("52".to_string()));
    assert_eq!(find_value("EDGE_WEIGHT_TYPE", &lines), None);
}

#[test]
fn can_prefer_colon_without_space_over_earlier_spaced_key() {
    let lines = to_lines(&["NAME : first", "NAME: second"]);

    assert_eq!(find_value("NAME", &lines), Some("second".to_string()));
}

#[test]
fn can_skip_empty_values() {
    let lines = to_lines(&["COMMENT:", "COMMENT : not used"]);

    assert_eq!(find_value("COMMENT", &lines), None);
}

#[test]
fn can_not_match_key_as_prefix_of_other_key() {
    let lines = to_lines(&["EDGE_WEIGHT_TYPE: EUC_2D", "NODE_COORD_TYPE : TWOD_COORDS"]);

    assert_eq!(find_value("TYPE", &lines), None);
}

#[test]
fn can_read_meta() {
    let reader = create_reader(get_test_resource_string(EXAMPLE_PATH).as_str());

    let meta = reader.read_meta().expect("cannot read meta");

    assert_eq!(meta.name.as_deref(), Some("example3"));
    assert_eq!(meta.problem_type.as_deref(), Some("TSP"));
    assert_eq!(meta.comment.as_deref(), Some("Three nodes on a line"));
    assert_eq!(meta.dimension, 3);
    assert_eq!(meta.edge_weight_type, "EUC_2D");
}

#[test]
fn can_omit_missing_optional_meta() {
    let reader = create_reader("DIMENSION: 1\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 1 1\n");

    let meta = reader.read_meta().expect("cannot read meta");

    assert_eq!(meta.name, None);
    assert_eq!(meta.problem_type, None);
    assert_eq!(meta.comment, None);
}

#[test]
fn can_read_meta_errors() {
    for (from, to, expected) in [
        (
            "EDGE_WEIGHT_TYPE: EUC_2D",
            "EDGE_WEIGHT_TYPE: GEO",
            ConvertError::unsupported("expecting 'EUC_2D' as EDGE_WEIGHT_TYPE, got 'GEO'"),
        ),
        ("EDGE_WEIGHT_TYPE: EUC_2D", "", ConvertError::unsupported("EDGE_WEIGHT_TYPE is not specified")),
        (
            "DIMENSION: 3",
            "DIMENSION: asd",
            ConvertError::malformed("cannot parse DIMENSION: 'invalid digit found in string'"),
        ),
        ("DIMENSION: 3", "DIMENSION: 0", ConvertError::malformed("DIMENSION should be positive, got '0'")),
        ("DIMENSION: 3", "", ConvertError::malformed("DIMENSION is not specified")),
    ] {
        let content = get_test_resource_string(EXAMPLE_PATH).replace(from, to);

        let result = create_reader(content.as_str()).read_meta();

        assert_eq!(result, Err(expected));
    }
}

#[test]
fn can_check_edge_weight_type_before_dimension() {
    let reader = create_reader("DIMENSION: three\nEDGE_WEIGHT_TYPE: ATT\n");

    let result = reader.read_meta();

    assert!(matches!(result, Err(ConvertError::UnsupportedFormat(_))));
}

#[test]
fn can_read_nodes() {
    let reader = create_reader(get_test_resource_string(EXAMPLE_PATH).as_str());

    let nodes = reader.read_nodes(3).expect("cannot read nodes");

    assert_eq!(nodes, vec![(1, Coordinate(0., 0.)), (2, Coordinate(3., 4.)), (3, Coordinate(6., 8.))]);
}

#[test]
fn can_read_nodes_with_irregular_whitespace() {
    let reader = create_reader("NODE_COORD_SECTION\n 1   5.5\t-2\n2 1e2 0\n");

    let nodes = reader.read_nodes(2).expect("cannot read nodes");

    assert_eq!(nodes, vec![(1, Coordinate(5.5, -2.)), (2, Coordinate(100., 0.))]);
}

#[test]
fn can_ignore_lines_after_last_node() {
    let reader = create_reader("NODE_COORD_SECTION\n1 0 0\n2 1 1\n3 2 2\nEOF\n");

    let nodes = reader.read_nodes(2).expect("cannot read nodes");

    assert_eq!(nodes.len(), 2);
}

#[test]
fn can_read_nodes_errors() {
    for &(content, dimension, expected) in &[
        ("1 0 0\n2 1 1\n", 2, "cannot find NODE_COORD_SECTION"),
        ("NODE_COORD_SECTION\n1 0 0\n", 2, "expecting 2 node lines after NODE_COORD_SECTION, got 1"),
        ("NODE_COORD_SECTION\n1 0 0\nEOF\n", 2, "unexpected coord data: 'EOF'"),
        ("NODE_COORD_SECTION\n1 0\n", 1, "unexpected coord data: '1 0'"),
        ("NODE_COORD_SECTION\n1 0 0 0\n", 1, "unexpected coord data: '1 0 0 0'"),
        ("NODE_COORD_SECTION\n1.0 0 0\n", 1, "cannot parse node id: 'invalid digit found in string'"),
        ("NODE_COORD_SECTION\n1 x 0\n", 1, "cannot parse coord.0: 'invalid float literal'"),
        ("NODE_COORD_SECTION\n1 0 NaN\n", 1, "cannot parse coord.1: 'NaN' is not a finite number"),
    ] {
        let result = create_reader(content).read_nodes(dimension);

        assert_eq!(result, Err(ConvertError::malformed(expected)));
    }
}

#[test]
fn can_read_problem() {
    let problem = get_test_resource_string(EXAMPLE_PATH).read_tsplib(&create_silent_logger()).expect("cannot read");

    assert_eq!(problem.vehicles.len(), 1);
    assert_eq!(
        problem.vehicles[0],
        Vehicle { id: 1, start: Coordinate(0., 0.), start_index: 0, end: Coordinate(0., 0.), end_index: 0 }
    );
    assert_eq!(
        problem.jobs,
        vec![
            Job { id: 2, location: Coordinate(3., 4.), location_index: 1 },
            Job { id: 3, location: Coordinate(6., 8.), location_index: 2 },
        ]
    );
    assert_eq!(problem.matrix, vec![vec![0, 5, 10], vec![5, 0, 5], vec![10, 5, 0]]);
}

#[test]
fn can_read_problem_from_buf_reader() {
    let reader = BufReader::new(get_test_resource("data/eil7.tsp").expect("cannot open file"));

    let problem = reader.read_tsplib(&create_silent_logger()).expect("cannot read problem");

    assert_eq!(problem.meta.name.as_deref(), Some("eil7"));
    assert_eq!(problem.jobs.len(), 6);
    assert_eq!(problem.jobs.iter().map(|job| job.location_index).collect::<Vec<_>>(), (1..=6).collect::<Vec<_>>());
    assert_eq!(problem.matrix[0], vec![0, 12, 19, 31, 22, 17, 23]);
}

#[test]
fn can_read_problem_with_non_utf8_header() {
    let content = b"COMMENT: caf\xe9\nDIMENSION: 2\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0 0\n2 3 4\n";

    let problem = BufReader::new(&content[..]).read_tsplib(&create_silent_logger()).expect("cannot read problem");

    assert_eq!(problem.meta.comment.as_deref(), Some("caf\u{FFFD}"));
    assert_eq!(problem.matrix, vec![vec![0, 5], vec![5, 0]]);
}

#[test]
fn can_read_single_node_problem() {
    let content = "DIMENSION: 1\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n7 1.5 2.5\nEOF\n".to_string();

    let problem = content.read_tsplib(&create_silent_logger()).expect("cannot read problem");

    assert_eq!(problem.vehicles[0].id, 7);
    assert!(problem.jobs.is_empty());
    assert_eq!(problem.matrix, vec![vec![0]]);
}

#[test]
fn can_not_build_matrix_for_unsupported_edge_weight_type() {
    let (logger, messages) = create_recording_logger();

    let result = get_test_resource_string("data/geo.tsp").read_tsplib(&logger);

    assert!(matches!(result, Err(ConvertError::UnsupportedFormat(_))));
    assert!(messages.lock().unwrap().is_empty());
}

#[test]
fn can_log_matrix_creation_and_jobs() {
    let (logger, messages) = create_recording_logger();

    get_test_resource_string(EXAMPLE_PATH).read_tsplib(&logger).expect("cannot read problem");

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("distance matrix 3x3 built in"));
    assert_eq!(messages[1], "problem 'example3' has 2 jobs");
}
