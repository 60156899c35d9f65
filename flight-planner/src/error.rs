//! Run-level errors.

use std::path::PathBuf;

use crate::planner::ConfigError;
use crate::tables::TableError;

/// Errors that abort a planning run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Route table or request file could not be loaded
    #[error(transparent)]
    Table(#[from] TableError),

    /// Config file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output file could not be written
    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
