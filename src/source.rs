use crate::error::SourceError;
use crate::models::{CsvSource, Upload};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FLASHCARDS_DIR: &str = "flashcards";

fn is_csv(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "csv")
}

/// Read a file as text, replacing invalid UTF-8 instead of failing.
fn read_text(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

pub fn get_csv_files(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let list_err = |source| SourceError::List {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        if path.is_file() && is_csv(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Every CSV file in `dir` as a named blob.
///
/// A missing directory means "no sets" and yields an empty list.
pub fn list_sources(dir: &Path) -> Result<Vec<CsvSource>, SourceError> {
    if !dir.exists() {
        tracing::info!("flashcards directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for path in get_csv_files(dir)? {
        let content = read_text(&path)?;
        sources.push(CsvSource {
            name: file_stem(&path),
            content,
        });
    }

    tracing::debug!("listed {} csv sources in {}", sources.len(), dir.display());
    Ok(sources)
}

/// Read a user-selected `.csv` file whole.
///
/// The id is the file name plus a millisecond timestamp so that uploading
/// the same file twice yields two distinct sets.
pub fn read_upload(path: &Path) -> Result<Upload, SourceError> {
    if !is_csv(path) {
        return Err(SourceError::NotCsv {
            path: path.to_path_buf(),
        });
    }

    let content = read_text(path)?;

    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let id = format!("{}{}", file_name, chrono::Utc::now().timestamp_millis());

    Ok(Upload {
        id,
        name: file_stem(path),
        content,
    })
}
