//! Per-row or per-column integer average and median of a whitespace
//! delimited matrix.
//!
//! ```
//! use matstat::{compute, Axis, Matrix, RowWidth};
//!
//! let matrix = Matrix::from_reader("1 2 3\n4 5 6\n".as_bytes(), RowWidth::Strict).unwrap();
//! let columns = compute(&matrix, Axis::Columns).unwrap();
//! assert_eq!(columns.averages, vec![3, 4, 5]);
//! assert_eq!(columns.medians, vec![4, 5, 6]);
//! ```

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod matrix;
pub mod stats;
pub mod utils;

pub use error::MatrixError;
pub use matrix::{Axis, Matrix, RowWidth};
pub use stats::{compute, compute_averages, compute_medians, StatsResult, Summary};
