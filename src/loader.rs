use crate::error::SourceError;
use crate::models::CsvSource;
use crate::source::list_sources;
use crossbeam_channel::{Receiver, bounded};
use std::path::PathBuf;
use std::thread;

pub type LoadResult = Result<Vec<CsvSource>, SourceError>;

/// List the flashcards directory on a worker thread.
///
/// The UI polls the returned receiver; the worker sends exactly one result
/// and exits.
pub fn spawn_loader(dir: PathBuf) -> std::io::Result<Receiver<LoadResult>> {
    let (tx, rx) = bounded(1);
    thread::Builder::new()
        .name("csv-flashcards::loader".to_string())
        .spawn(move || {
            tracing::debug!("loader listing {}", dir.display());
            let result = list_sources(&dir);
            if tx.send(result).is_err() {
                tracing::debug!("loader receiver dropped before load finished");
            }
        })?;
    Ok(rx)
}
