//! End-to-end tests over matrix files on disk

use std::fs;
use std::path::Path;

use spmat::{
    write_result, CooMatrix, MatrixError, Operation, RunConfig, SparseMatrix, SpmatError,
};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_add_and_multiply_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n");
    let b = write(dir.path(), "b.txt", "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n");

    let a = CooMatrix::load(a).unwrap();
    let b = CooMatrix::load(b).unwrap();

    let sum = a.add(&b).unwrap();
    assert_eq!(
        sum.serialize(),
        "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)"
    );

    let product = a.multiply(&b).unwrap();
    assert_eq!(product.serialize(), "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)");
    assert_eq!(product.get(1, 1), 0);
}

#[test]
fn test_write_result_for_each_operation() {
    let dir = tempfile::tempdir().unwrap();
    let first = write(dir.path(), "left.txt", "rows=2\ncols=2\n(0, 1, 5)\n(1, 0, 2)");
    let second = write(dir.path(), "right.txt", "rows=2\ncols=2\n(0, 1, 5)\n(1, 1, 1)");
    let config = RunConfig::default().with_output_dir(dir.path().join("resultsOutputs"));

    let a = CooMatrix::load(&first).unwrap();
    let b = CooMatrix::load(&second).unwrap();

    for (operation, name) in [
        (Operation::Add, "left_plus_right.txt"),
        (Operation::Subtract, "left_minus_right.txt"),
        (Operation::Multiply, "left_times_right.txt"),
    ] {
        let result = a.apply(operation, &b).unwrap();
        let path = write_result(&config, &first, &second, operation, &result).unwrap();
        assert_eq!(path.file_name().unwrap(), name);

        let reloaded = CooMatrix::load(&path).unwrap();
        assert_eq!(reloaded, result);
    }

    let difference = CooMatrix::load(dir.path().join("resultsOutputs/left_minus_right.txt")).unwrap();
    assert_eq!(difference.get_element(0, 1), None);
    assert_eq!(difference.get(1, 0), 2);
    assert_eq!(difference.get(1, 1), -1);
}

#[test]
fn test_malformed_files_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let cases = [
        ("header.txt", "rows=abc\ncols=2", MatrixError::InvalidDimensions { line: 1 }),
        (
            "fields.txt",
            "rows=2\ncols=2\n(0, 0, 1)\n(1,2)",
            MatrixError::InvalidValueCount { line: 4, found: 2 },
        ),
        (
            "fraction.txt",
            "rows=2\ncols=2\n(1, 2, 3.5)",
            MatrixError::WrongFormat { line: 3 },
        ),
        (
            "brackets.txt",
            "rows=2\ncols=2\n1, 2, 3",
            MatrixError::WrongFormat { line: 3 },
        ),
    ];

    for (name, contents, expected) in cases {
        let path = write(dir.path(), name, contents);
        let err = CooMatrix::load(&path).unwrap_err();
        assert!(err.is_format_error(), "{name}: {err}");
        assert_eq!(err.matrix_error(), Some(&expected), "{name}");
    }
}

#[test]
fn test_dimension_mismatch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let a = CooMatrix::parse("rows=2\ncols=3\n(0, 0, 1)").unwrap();
    let b = CooMatrix::parse("rows=2\ncols=3\n(1, 2, 1)").unwrap();

    let err = a.multiply(&b).unwrap_err();
    assert!(matches!(
        err,
        SpmatError::Matrix(MatrixError::DimensionMismatch {
            operation: Operation::Multiply,
            ..
        })
    ));
    assert!(!dir.path().join("resultsOutputs").exists());
}

#[test]
fn test_clearing_an_entry_removes_it_from_output() {
    let mut matrix = CooMatrix::parse("rows=3\ncols=3\n(0, 0, 1)\n(2, 2, 9)").unwrap();
    matrix.set(2, 2, 0);

    assert_eq!(matrix.get(2, 2), 0);
    assert_eq!(matrix.serialize(), "rows=3\ncols=3\n(0, 0, 1)");
}
