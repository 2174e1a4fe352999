//! Writing cards to disk.
//!
//! The output format is picked from the file suffix alone. `.json` and
//! `.csv` are checked independently; a path matching neither writes nothing.

mod csv;
mod json;

pub use self::csv::{write_csv, write_csv_to};
pub use self::json::write_json;

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::card::Flashcard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn suffix(self) -> &'static str {
        match self {
            ExportFormat::Json => ".json",
            ExportFormat::Csv => ".csv",
        }
    }

    /// Every format whose suffix `path` ends with, in export order.
    pub fn for_path(path: &Path) -> Vec<ExportFormat> {
        let name = path.to_string_lossy();
        [ExportFormat::Json, ExportFormat::Csv]
            .into_iter()
            .filter(|f| !name.is_empty() && name.ends_with(f.suffix()))
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        ExportError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Export `cards` in every format implied by `path`'s suffix.
///
/// Returns the formats written; an empty list means the suffix was not
/// recognized and the file was left untouched.
pub fn export(cards: &[Flashcard], path: &Path) -> Result<Vec<ExportFormat>, ExportError> {
    let formats = ExportFormat::for_path(path);
    for format in &formats {
        match format {
            ExportFormat::Json => write_json(cards, path)?,
            ExportFormat::Csv => write_csv(cards, path)?,
        }
        tracing::info!("exported {} card(s) as {:?} to {}", cards.len(), format, path.display());
    }
    if formats.is_empty() {
        tracing::warn!("no export format for {}", path.display());
    }
    Ok(formats)
}

/// Create or truncate `path` for writing, readable only by the owner when
/// newly created.
fn create_owner_only(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}
