use std::io::Write;
use std::path::Path;

use super::{create_owner_only, ExportError};
use crate::card::Flashcard;

const HEADER: [&str; 2] = ["Question", "Answer"];

/// Write `cards` as CSV with a `Question,Answer` header row.
///
/// Stops at the first row that fails to write; the file keeps whatever was
/// written before the failure.
pub fn write_csv(cards: &[Flashcard], path: &Path) -> Result<(), ExportError> {
    let file = create_owner_only(path).map_err(|e| ExportError::write(path, e))?;
    write_csv_to(cards, file, path)
}

/// Write the CSV table to `out`. `path` only labels errors.
pub fn write_csv_to<W: Write>(
    cards: &[Flashcard],
    out: W,
    path: &Path,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    writer
        .write_record(HEADER)
        .map_err(|e| ExportError::write(path, csv_io(e)))?;
    for card in cards {
        writer
            .write_record([card.question(), card.answer()])
            .map_err(|e| ExportError::write(path, csv_io(e)))?;
    }
    writer.flush().map_err(|e| ExportError::write(path, e))
}

fn csv_io(err: csv::Error) -> std::io::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => std::io::Error::other(format!("{:?}", other)),
    }
}
