use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::matrix::Axis;
use crate::stats::{StatsResult, Summary};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write `result` in the layout that matches its axis.
pub fn display<W: Write>(
    out: &mut W,
    result: &StatsResult,
    format: OutputFormat,
) -> io::Result<()> {
    match (format, result.axis) {
        (OutputFormat::Text, Axis::Rows) => display_rows(out, result),
        (OutputFormat::Text, Axis::Columns) => display_columns(out, result),
        (OutputFormat::Json, Axis::Rows) => {
            let summaries: Vec<Summary> = result.summaries().collect();
            serde_json::to_writer_pretty(&mut *out, &summaries)?;
            writeln!(out)
        }
        (OutputFormat::Json, Axis::Columns) => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)
        }
    }
}

// One line per row, right aligned under the headers.
pub fn display_rows<W: Write>(out: &mut W, result: &StatsResult) -> io::Result<()> {
    writeln!(out, "Average  Median")?;
    for summary in result.summaries() {
        // {:>#} gives the column a fixed width of # characters, aligned right
        writeln!(out, "{:>7}  {:>6}", summary.average, summary.median)?;
    }
    Ok(())
}

// All averages on one line, then all medians.
pub fn display_columns<W: Write>(out: &mut W, result: &StatsResult) -> io::Result<()> {
    writeln!(out, "Averages:")?;
    writeln!(out, "{}", tab_separated(&result.averages))?;
    writeln!(out, "Medians:")?;
    writeln!(out, "{}", tab_separated(&result.medians))
}

fn tab_separated(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(axis: Axis, averages: Vec<i64>, medians: Vec<i64>) -> StatsResult {
        StatsResult {
            axis,
            averages,
            medians,
        }
    }

    fn render(result: &StatsResult, format: OutputFormat) -> String {
        let mut out = Vec::new();
        display(&mut out, result, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rows_as_table() {
        let text = render(&result(Axis::Rows, vec![2, 5], vec![2, -15]), OutputFormat::Text);
        assert_eq!(text, "Average  Median\n      2       2\n      5     -15\n");
    }

    #[test]
    fn columns_as_two_lines() {
        let text = render(
            &result(Axis::Columns, vec![3, 4, 5], vec![4, 5, 6]),
            OutputFormat::Text,
        );
        assert_eq!(text, "Averages:\n3\t4\t5\nMedians:\n4\t5\t6\n");
    }

    #[test]
    fn rows_as_json() {
        let text = render(&result(Axis::Rows, vec![2, 5], vec![2, 5]), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "average": 2, "median": 2 },
                { "average": 5, "median": 5 }
            ])
        );
    }

    #[test]
    fn columns_as_json() {
        let text = render(
            &result(Axis::Columns, vec![3, 4, 5], vec![4, 5, 6]),
            OutputFormat::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "averages": [3, 4, 5], "medians": [4, 5, 6] })
        );
    }
}
