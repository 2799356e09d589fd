//! Naming and writing result files

use std::fs;
use std::path::{Path, PathBuf};

use spmat_core::Operation;

use crate::config::{OutputFormat, RunConfig};
use crate::error::{Result, SpmatError};
use crate::matrix::CooMatrix;

/// Name of the file holding `first <operation> second`
///
/// Uses the file names of both inputs with a trailing `.txt` removed,
/// joined by the operation's infix, e.g. `a_plus_b.txt`.
pub fn result_file_name(
    first: &Path,
    second: &Path,
    operation: Operation,
    extension: &str,
) -> String {
    format!(
        "{}_{}_{}.{extension}",
        input_stem(first),
        operation.file_infix(),
        input_stem(second)
    )
}

fn input_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.strip_suffix(".txt") {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Encode a result matrix in the configured format
pub fn render(matrix: &CooMatrix, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(matrix.serialize()),
        #[cfg(feature = "serde")]
        OutputFormat::Json => matrix.to_json(),
    }
}

/// Write an operation result into the configured output directory
///
/// Creates the directory when it does not exist and returns the path
/// of the written file.
pub fn write_result(
    config: &RunConfig,
    first: &Path,
    second: &Path,
    operation: Operation,
    matrix: &CooMatrix,
) -> Result<PathBuf> {
    let dir = config.output_dir();
    fs::create_dir_all(dir).map_err(|source| SpmatError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(result_file_name(
        first,
        second,
        operation,
        config.format.extension(),
    ));
    let contents = render(matrix, config.format)?;
    fs::write(&path, contents).map_err(|source| SpmatError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), %operation, "wrote result");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_file_name() {
        assert_eq!(
            result_file_name(
                Path::new("inputs/a.txt"),
                Path::new("b.txt"),
                Operation::Add,
                "txt"
            ),
            "a_plus_b.txt"
        );
        assert_eq!(
            result_file_name(
                Path::new("/data/left.txt"),
                Path::new("/data/right.txt"),
                Operation::Subtract,
                "txt"
            ),
            "left_minus_right.txt"
        );
        // Only a .txt suffix is stripped
        assert_eq!(
            result_file_name(
                Path::new("m1.mat"),
                Path::new("m2"),
                Operation::Multiply,
                "json"
            ),
            "m1.mat_times_m2.json"
        );
    }

    #[test]
    fn test_write_result_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::default().with_output_dir(dir.path().join("nested/out"));

        let mut matrix = CooMatrix::new(1, 1);
        matrix.set(0, 0, 2);

        let path = write_result(
            &config,
            Path::new("a.txt"),
            Path::new("b.txt"),
            Operation::Multiply,
            &matrix,
        )
        .unwrap();

        assert!(path.ends_with("nested/out/a_times_b.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "rows=1\ncols=1\n(0, 0, 2)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_write_result_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::default()
            .with_output_dir(dir.path())
            .with_format(OutputFormat::Json);

        let matrix = CooMatrix::new(2, 2);
        let path = write_result(
            &config,
            Path::new("x.txt"),
            Path::new("y.txt"),
            Operation::Add,
            &matrix,
        )
        .unwrap();

        assert_eq!(path.file_name().unwrap(), "x_plus_y.json");
        let back = CooMatrix::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, matrix);
    }
}
