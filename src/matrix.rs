// Load a whitespace delimited integer matrix into a flat row-major buffer.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// The dimension statistics are aggregated along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// One result per row, computed over that row's columns.
    Rows,
    /// One result per column, computed over that column's rows.
    #[serde(alias = "cols")]
    Columns,
}

/// How the column count is derived while loading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowWidth {
    /// Every row must be as wide as the first one.
    #[default]
    Strict,
    /// Trust the width of the last line read, whatever came before it.
    LastLine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    values: Vec<i64>,
    num_rows: usize,
    num_cols: usize,
}

impl Matrix {
    /// Open `path` and load it, see [`Matrix::from_reader`].
    pub fn open<P: AsRef<Path>>(path: P, width: RowWidth) -> Result<Matrix, MatrixError> {
        let file = File::open(path)?;
        Matrix::from_reader(BufReader::new(file), width)
    }

    /// Read one matrix row per line until end of input.
    ///
    /// Blank lines are skipped. Empty input is not an error here: it
    /// produces an empty matrix, which the statistics functions reject.
    pub fn from_reader<R: BufRead>(reader: R, width: RowWidth) -> Result<Matrix, MatrixError> {
        let mut values = Vec::new();
        let mut num_rows = 0;
        let mut num_cols = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let before = values.len();
            for token in line.split_whitespace() {
                let value = token.parse::<i64>().map_err(|_| MatrixError::Parse {
                    line: line_number,
                    token: token.to_string(),
                })?;
                values.push(value);
            }
            let tokens = values.len() - before;
            if tokens == 0 {
                trace!("line {}: blank, skipped", line_number);
                continue;
            }
            trace!("line {}: {} values", line_number, tokens);

            if width == RowWidth::Strict && num_rows > 0 && tokens != num_cols {
                return Err(MatrixError::invalid(format!(
                    "line {} has {} values, expected {}",
                    line_number, tokens, num_cols
                )));
            }
            num_cols = tokens;
            num_rows += 1;
        }

        // With `LastLine` a narrow final row leaves surplus values, which are
        // ignored, but a wide one would index past the end of the buffer.
        if values.len() < num_rows * num_cols {
            return Err(MatrixError::invalid(format!(
                "{} rows of {} columns need {} values, found {}",
                num_rows,
                num_cols,
                num_rows * num_cols,
                values.len()
            )));
        }
        values.truncate(num_rows * num_cols);

        Ok(Matrix {
            values,
            num_rows,
            num_cols,
        })
    }

    /// Build a matrix from in-memory rows, which must all have the same width.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Matrix, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(num_rows * num_cols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != num_cols {
                return Err(MatrixError::invalid(format!(
                    "row {} has {} values, expected {}",
                    index + 1,
                    row.len(),
                    num_cols
                )));
            }
            values.extend(row);
        }
        Ok(Matrix {
            values,
            num_rows,
            num_cols,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0 || self.num_cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.num_rows && col < self.num_cols {
            Some(self.values[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.num_cols;
        &self.values[start..start + self.num_cols]
    }

    /// Panics if `col` is out of range.
    pub fn column(&self, col: usize) -> impl Iterator<Item = i64> + '_ {
        assert!(col < self.num_cols, "column {} out of range", col);
        self.values.iter().skip(col).step_by(self.num_cols).copied()
    }

    /// Number of results along `axis`: rows for `Rows`, columns for `Columns`.
    pub fn outer_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rows => self.num_rows,
            Axis::Columns => self.num_cols,
        }
    }

    /// Number of values each result is computed over.
    pub fn inner_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rows => self.num_cols,
            Axis::Columns => self.num_rows,
        }
    }

    /// Copy out row or column `index`.
    pub fn lane(&self, axis: Axis, index: usize) -> Vec<i64> {
        match axis {
            Axis::Rows => self.row(index).to_vec(),
            Axis::Columns => self.column(index).collect(),
        }
    }

    pub fn transpose(&self) -> Matrix {
        let values = (0..self.num_cols)
            .flat_map(|col| self.column(col))
            .collect();
        Matrix {
            values,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }
}
