//! Error types for loading card sets.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// Listing the flashcards directory failed.
    #[error("failed to list {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a single CSV file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a .csv file")]
    NotCsv { path: PathBuf },

    /// The file parsed, but no row had both a question and an answer.
    #[error("{name} contains no valid cards")]
    Empty { name: String },
}
