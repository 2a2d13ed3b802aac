// Load real files from disk and run them through the engine and formatter.

use std::io::Write;

use matstat::utils::format::{self, OutputFormat};
use matstat::{compute, Axis, Matrix, MatrixError, RowWidth};

fn matrix_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn render(path: &std::path::Path, axis: Axis) -> String {
    let matrix = Matrix::open(path, RowWidth::Strict).unwrap();
    let result = compute(&matrix, axis).unwrap();
    let mut out = Vec::new();
    format::display(&mut out, &result, OutputFormat::Text).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn two_by_three() {
    let file = matrix_file("1 2 3\n4 5 6\n");
    assert_eq!(
        render(file.path(), Axis::Rows),
        "Average  Median\n      2       2\n      5       5\n"
    );
    assert_eq!(
        render(file.path(), Axis::Columns),
        "Averages:\n3\t4\t5\nMedians:\n4\t5\t6\n"
    );
}

#[test]
fn tab_delimited_with_multi_digit_values() {
    let file = matrix_file("93\t93\t91\t62\t1\n8\t64\t70\t12\t91\n");
    let matrix = Matrix::open(file.path(), RowWidth::Strict).unwrap();

    let rows = compute(&matrix, Axis::Rows).unwrap();
    // 340 / 5 = 68, 245 / 5 = 49
    assert_eq!(rows.averages, vec![68, 49]);
    assert_eq!(rows.medians, vec![91, 64]);

    let columns = compute(&matrix, Axis::Columns).unwrap();
    assert_eq!(columns.averages, vec![51, 79, 81, 37, 46]);
    assert_eq!(columns.medians, vec![93, 93, 91, 62, 91]);
}

#[test]
fn empty_file_is_rejected() {
    let file = matrix_file("");
    let matrix = Matrix::open(file.path(), RowWidth::Strict).unwrap();
    assert!(matches!(
        compute(&matrix, Axis::Rows),
        Err(MatrixError::Invalid(_))
    ));
}

#[test]
fn bad_token_names_its_line() {
    let file = matrix_file("1 2\n3 4\n5 six\n");
    let err = Matrix::open(file.path(), RowWidth::Strict).unwrap_err();
    assert_eq!(err.to_string(), "line 3: cannot parse \"six\" as an integer");
}
