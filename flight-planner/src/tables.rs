//! Loading the route table and the request file.
//!
//! Both files are pipe-delimited text with a header line that is skipped.
//! Blank lines are ignored. Any other line that fails to parse aborts the
//! load, reporting the file and 1-based line number.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{FlightRequest, ParseError, Route};

/// Error loading a table file.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row is malformed
    #[error("{path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Read and parse the route table at `path`.
pub async fn load_routes(path: &Path) -> Result<Vec<Route>, TableError> {
    let contents = read(path).await?;
    parse_routes(path, &contents)
}

/// Read and parse the request file at `path`.
pub async fn load_requests(path: &Path) -> Result<Vec<FlightRequest>, TableError> {
    let contents = read(path).await?;
    parse_requests(path, &contents)
}

/// Parse route table contents. `path` is only used in error messages.
pub fn parse_routes(path: &Path, contents: &str) -> Result<Vec<Route>, TableError> {
    parse_rows(path, contents, Route::parse_row)
}

/// Parse request file contents. `path` is only used in error messages.
pub fn parse_requests(path: &Path, contents: &str) -> Result<Vec<FlightRequest>, TableError> {
    parse_rows(path, contents, FlightRequest::parse_row)
}

async fn read(path: &Path) -> Result<String, TableError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_rows<T>(
    path: &Path,
    contents: &str,
    parse: impl Fn(&str) -> Result<T, ParseError>,
) -> Result<Vec<T>, TableError> {
    let rows = contents
        .lines()
        .enumerate()
        .skip(1) // header
        .filter(|(_, row)| !row.trim().is_empty())
        .map(|(idx, row)| {
            parse(row).map_err(|source| TableError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })
        })
        .collect::<Result<Vec<T>, TableError>>()?;

    debug!(path = %path.display(), rows = rows.len(), "Loaded table");
    Ok(rows)
}
