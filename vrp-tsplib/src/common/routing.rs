#[cfg(test)]
#[path = "../../tests/unit/common/routing_test.rs"]
mod routing_test;

use crate::format::{Coordinate, DistanceMatrix};
use crate::utils::{InfoLogger, Timer};

/// Rounds value to the nearest integer using TSPLIB rule: `trunc(x + 0.5)`.
pub fn nint(value: f64) -> i64 {
    (value + 0.5) as i64
}

/// Returns a rounded euclidean distance between two coordinates.
pub fn euc_2d(from: &Coordinate, to: &Coordinate) -> i64 {
    let x = from.0 - to.0;
    let y = from.1 - to.1;

    nint((x * x + y * y).sqrt())
}

/// Creates a full square distance matrix for given coordinates.
pub fn create_distance_matrix(coordinates: &[Coordinate], logger: &InfoLogger) -> DistanceMatrix {
    let size = coordinates.len();

    Timer::measure_duration_with_callback(
        || {
            let mut matrix = vec![vec![0; size]; size];

            // NOTE distance is symmetric, so only the upper triangle is calculated
            for (i, from) in coordinates.iter().enumerate() {
                for (j, to) in coordinates.iter().enumerate().skip(i + 1) {
                    let distance = euc_2d(from, to);
                    matrix[i][j] = distance;
                    matrix[j][i] = distance;
                }
            }

            matrix
        },
        |duration| (logger)(format!("distance matrix {size}x{size} built in {}ms", duration.as_millis()).as_str()),
    )
}
