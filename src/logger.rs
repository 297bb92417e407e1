use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

fn filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_flashcards={}", level)))
}

/// A subscriber appending plain-text lines to `path`, or `None` if the file
/// cannot be opened.
fn file_subscriber(path: &Path, verbose: u8) -> Option<impl Subscriber + Send + Sync + 'static> {
    let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
    Some(
        tracing_subscriber::fmt()
            .with_env_filter(filter(verbose))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish(),
    )
}

/// Log to a file. Used while the terminal UI owns stdout.
///
/// If the file cannot be opened logging stays disabled; it never stops the
/// UI from starting.
pub fn init_file(path: &Path, verbose: u8) {
    if let Some(subscriber) = file_subscriber(path, verbose) {
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

pub fn init_stderr(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_logger_writes_messages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");
        let subscriber = file_subscriber(&path, 0).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Test log message");
        });

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Test log message"));
        assert!(!contents.contains('\u{1b}'), "log file should not contain ansi escapes");
    }

    #[test]
    fn test_file_logger_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");
        fs::write(&path, "earlier line\n").unwrap();

        let subscriber = file_subscriber(&path, 1).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("later line");
        });

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier line\n"));
        assert!(contents.contains("later line"));
    }

    #[test]
    fn test_logger_init_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("test.log");
        assert!(file_subscriber(&path, 1).is_none());
        init_file(&path, 1);
    }

    #[test]
    fn test_logger_init_twice() {
        init_stderr(0);
        init_stderr(2);
    }
}
