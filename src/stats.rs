// Per-row or per-column average and median.

use serde::Serialize;

use crate::error::MatrixError;
use crate::matrix::{Axis, Matrix};
use crate::utils::math;

/// Average and median for a single row or column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub average: i64,
    pub median: i64,
}

/// Averages and medians along one axis, aligned by row or column index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatsResult {
    #[serde(skip)]
    pub axis: Axis,
    pub averages: Vec<i64>,
    pub medians: Vec<i64>,
}

impl StatsResult {
    /// Pair up averages and medians by index.
    pub fn summaries(&self) -> impl Iterator<Item = Summary> + '_ {
        self.averages
            .iter()
            .zip(&self.medians)
            .map(|(&average, &median)| Summary { average, median })
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }
}

// Both dimensions must be non-zero, whichever axis is chosen.
fn check_dimensions(matrix: &Matrix) -> Result<(), MatrixError> {
    if matrix.num_rows() == 0 {
        return Err(MatrixError::invalid("matrix has no rows"));
    }
    if matrix.num_cols() == 0 {
        return Err(MatrixError::invalid("matrix has no columns"));
    }
    Ok(())
}

// Apply `statistic` to every row or column in turn.
fn per_lane<F>(matrix: &Matrix, axis: Axis, mut statistic: F) -> Result<Vec<i64>, MatrixError>
where
    F: FnMut(Vec<i64>) -> Option<i64>,
{
    check_dimensions(matrix)?;
    (0..matrix.outer_len(axis))
        .map(|index| {
            statistic(matrix.lane(axis, index)).ok_or_else(|| {
                MatrixError::invalid(format!("{:?} lane {} is empty", axis, index))
            })
        })
        .collect()
}

/// Rounded (half-up) integer average of each row or column.
pub fn compute_averages(matrix: &Matrix, axis: Axis) -> Result<Vec<i64>, MatrixError> {
    per_lane(matrix, axis, |lane| math::rounded_average(&lane))
}

/// Median of each row or column; the upper middle value for even lengths.
pub fn compute_medians(matrix: &Matrix, axis: Axis) -> Result<Vec<i64>, MatrixError> {
    per_lane(matrix, axis, |mut lane| math::upper_median(&mut lane))
}

/// Both statistics along `axis`.
pub fn compute(matrix: &Matrix, axis: Axis) -> Result<StatsResult, MatrixError> {
    debug!(
        "computing {:?} statistics over {} x {} matrix",
        axis,
        matrix.num_rows(),
        matrix.num_cols()
    );
    Ok(StatsResult {
        axis,
        averages: compute_averages(matrix, axis)?,
        medians: compute_medians(matrix, axis)?,
    })
}
